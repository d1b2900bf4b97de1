// SPDX-License-Identifier: MPL-2.0
//! Player view.
//!
//! Renders a [`Chrome`] as an Iced widget tree: the video surface, the
//! timeline with its ghost and hint, and the control bar. The view holds no
//! state; every interaction is reported as a [`Message`] for the
//! application to turn into player events.

use crate::player::{Chrome, ControlEvent, Fill, FullscreenIcon, PlaybackIcon, VolumeIcon};
use crate::ui::design_tokens::{opacity, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{
    button, column, container, mouse_area, responsive, row, slider, text, Column, Space, Stack,
};
use iced::{mouse, Alignment, Element, Length, Padding, Size};

/// Volume slider resolution in slider units (0 to 100).
const VOLUME_STEP: f64 = 1.0;

/// Messages emitted by the player view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Single click on the video surface.
    VideoPressed,
    /// Double click on the video surface.
    VideoDoubleClicked,
    /// The cursor moved anywhere over the player.
    PointerMoved,
    /// A control in the bar was used.
    Control(ControlEvent),
    /// The cursor moved over the timeline. `x` is relative to the bar.
    TimelineMoved { x: f32, width: f32 },
    TimelinePressed,
    TimelineReleased,
}

/// Renders the whole player.
pub fn view(chrome: &Chrome) -> Element<'_, Message> {
    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(video_surface(chrome));

    if !chrome.interface_hidden() {
        let mut overlay = Column::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(Space::new().height(Length::Fill));
        if chrome.speed_menu_open() {
            overlay = overlay.push(speed_menu(chrome));
        }
        overlay = overlay.push(control_bar(chrome));
        layers = layers.push(overlay);
    }

    mouse_area(layers)
        .on_move(|_| Message::PointerMoved)
        .into()
}

fn video_surface(chrome: &Chrome) -> Element<'_, Message> {
    let label = chrome
        .source_name()
        .map_or_else(|| "Press play to open a video".to_string(), str::to_string);

    let mut content = column![].spacing(spacing::SM).align_x(Alignment::Center);
    if let Some(glyph) = center_glyph(chrome) {
        content = content.push(
            button(text(glyph).size(sizing::ICON_LG))
                .on_press(Message::VideoPressed)
                .padding(spacing::LG)
                .style(styles::button::overlay(
                    opacity::OVERLAY_MEDIUM,
                    opacity::OVERLAY_HOVER,
                )),
        );
    }
    content = content.push(text(label).size(typography::TITLE));

    let surface = container(content)
        .center(Length::Fill)
        .style(styles::container::video_surface);

    mouse_area(surface)
        .on_press(Message::VideoPressed)
        .on_double_click(Message::VideoDoubleClicked)
        .into()
}

/// Large glyph in the middle of the video, if any.
fn center_glyph(chrome: &Chrome) -> Option<&'static str> {
    if chrome.pause_overlay_visible() {
        Some(playback_glyph(PlaybackIcon::Play))
    } else if chrome.play_overlay_visible() && !chrome.interface_hidden() {
        Some(playback_glyph(PlaybackIcon::Pause))
    } else {
        None
    }
}

fn control_bar(chrome: &Chrome) -> Element<'_, Message> {
    let bar = column![
        hint_row(chrome),
        timeline(chrome.current_fill(), chrome.ghost_fill_px()),
        controls_row(chrome),
    ]
    .spacing(spacing::XS)
    .width(Length::Fill);

    container(bar)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::control_bar)
        .into()
}

fn hint_row(chrome: &Chrome) -> Element<'_, Message> {
    let hint = chrome.hint();
    let mut row = row![Space::new().width(Length::Fixed(hint.left_px.max(0.0)))];
    if !hint.text.is_empty() {
        row = row.push(
            container(text(hint.text.as_str()).size(typography::CAPTION))
                .width(Length::Fixed(sizing::HINT_WIDTH))
                .center_x(Length::Fixed(sizing::HINT_WIDTH))
                .padding(spacing::XXS)
                .style(styles::overlay::indicator(radius::SM)),
        );
    }
    container(row)
        .height(Length::Fixed(typography::CAPTION + spacing::SM))
        .into()
}

fn timeline<'a>(current: Fill, ghost_px: f32) -> Element<'a, Message> {
    let strip = responsive(move |size: Size| {
        let width = size.width;
        let margin = (sizing::TIMELINE_HIT - sizing::TIMELINE_TRACK) / 2.0;

        let bars = Stack::new()
            .push(bar_layer(Length::Fill, styles::container::timeline_track))
            .push(bar_layer(
                Length::Fixed(ghost_px.clamp(0.0, width)),
                styles::container::timeline_ghost,
            ))
            .push(bar_layer(
                Length::Fixed(current.fraction() * width),
                styles::container::timeline_current,
            ));

        mouse_area(container(bars).padding(Padding::from([margin, 0.0])))
            .on_move(move |point| Message::TimelineMoved { x: point.x, width })
            .on_press(Message::TimelinePressed)
            .on_release(Message::TimelineReleased)
            .interaction(mouse::Interaction::Pointer)
            .into()
    });

    container(strip)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TIMELINE_HIT))
        .into()
}

fn bar_layer<'a>(
    width: Length,
    style: fn(&iced::Theme) -> container::Style,
) -> Element<'a, Message> {
    container(Space::new())
        .width(width)
        .height(Length::Fixed(sizing::TIMELINE_TRACK))
        .style(style)
        .into()
}

fn controls_row(chrome: &Chrome) -> Element<'_, Message> {
    let mut controls = row![
        control_button(
            playback_glyph(chrome.playback_icon()),
            ControlEvent::TogglePlayback
        ),
        control_button("«", ControlEvent::SkipBackward),
        control_button("»", ControlEvent::SkipForward),
        control_button(
            volume_glyph(chrome.volume_icon()),
            ControlEvent::ToggleVolume
        ),
        slider(0.0..=100.0, chrome.volume_slider(), |value| {
            Message::Control(ControlEvent::VolumeInput(value))
        })
        .step(VOLUME_STEP)
        .width(Length::Fixed(sizing::VOLUME_SLIDER_WIDTH))
        .style(styles::slider::volume),
        text(chrome.duration_label()).size(typography::BODY),
        Space::new().width(Length::Fill),
        control_button(speed_label(chrome), ControlEvent::OpenSpeedMenu),
    ]
    .spacing(spacing::XS)
    .align_y(Alignment::Center);

    if chrome.pip_visible() {
        let pip = button(text("⧉").size(sizing::ICON_SM))
            .on_press_maybe(
                chrome
                    .pip_enabled()
                    .then_some(Message::Control(ControlEvent::TogglePictureInPicture)),
            )
            .padding(spacing::XS)
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .style(styles::button::control);
        controls = controls.push(pip);
    }

    controls
        .push(control_button(
            fullscreen_glyph(chrome.fullscreen_icon()),
            ControlEvent::ToggleFullscreen,
        ))
        .into()
}

fn control_button<'a>(
    label: impl text::IntoFragment<'a>,
    event: ControlEvent,
) -> Element<'a, Message> {
    button(text(label).size(sizing::ICON_SM))
        .on_press(Message::Control(event))
        .padding(spacing::XS)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::control)
        .into()
}

fn speed_menu(chrome: &Chrome) -> Element<'_, Message> {
    let options = chrome
        .speed_options()
        .iter()
        .enumerate()
        .fold(Column::new().spacing(spacing::XXS), |menu, (index, option)| {
            menu.push(
                button(text(option.label.as_str()).size(typography::BODY))
                    .on_press(Message::Control(ControlEvent::SelectSpeed(index)))
                    .width(Length::Fill)
                    .padding(spacing::XS)
                    .style(styles::button::speed_option(option.active)),
            )
        });

    let menu = container(options)
        .width(Length::Fixed(sizing::SPEED_MENU_WIDTH))
        .padding(spacing::XS)
        .style(styles::container::speed_menu);

    row![Space::new().width(Length::Fill), menu]
        .padding(Padding::from([0.0, spacing::SM]))
        .into()
}

fn speed_label(chrome: &Chrome) -> String {
    chrome
        .speed_options()
        .iter()
        .find(|option| option.active)
        .map_or_else(|| "Speed".to_string(), |option| option.label.clone())
}

/// Glyph for the toggle button.
#[must_use]
pub fn playback_glyph(icon: PlaybackIcon) -> &'static str {
    match icon {
        PlaybackIcon::Play => "▶",
        PlaybackIcon::Pause => "❚❚",
    }
}

#[must_use]
pub fn volume_glyph(icon: VolumeIcon) -> &'static str {
    match icon {
        VolumeIcon::Loud => "🔊",
        VolumeIcon::Medium => "🔉",
        VolumeIcon::Low => "🔈",
        VolumeIcon::Muted => "🔇",
    }
}

#[must_use]
pub fn fullscreen_glyph(icon: FullscreenIcon) -> &'static str {
    match icon {
        FullscreenIcon::Expand => "⛶",
        FullscreenIcon::Compress => "⤡",
    }
}
