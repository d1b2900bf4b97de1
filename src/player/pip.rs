// SPDX-License-Identifier: MPL-2.0
//! Picture-in-picture trigger state.

use crate::domain::media::ReadyState;

/// Whether the host offers picture-in-picture at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayCapabilities {
    /// The picture-in-picture API exists on this host.
    pub picture_in_picture_api: bool,
    /// The host currently allows picture-in-picture.
    pub picture_in_picture_enabled: bool,
}

impl DisplayCapabilities {
    /// Capabilities of a host offering picture-in-picture.
    #[must_use]
    pub fn with_picture_in_picture() -> Self {
        Self {
            picture_in_picture_api: true,
            picture_in_picture_enabled: true,
        }
    }
}

/// Proof that a picture-in-picture request is in flight.
///
/// Issued when the trigger is disabled and handed back when the request
/// settles; only the matching ticket re-enables the trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PipTicket(u64);

/// Visibility and availability of the picture-in-picture trigger.
#[derive(Debug, Clone, Default)]
pub struct PipControl {
    visible: bool,
    enabled: bool,
    active: bool,
    pending: Option<PipTicket>,
    issued: u64,
}

impl PipControl {
    /// Recomputes availability from the host and the bound media.
    ///
    /// A pending request keeps the trigger disabled.
    pub fn refresh(
        &mut self,
        capabilities: DisplayCapabilities,
        media_disallows: bool,
        ready_state: ReadyState,
    ) {
        self.visible = capabilities.picture_in_picture_api
            && capabilities.picture_in_picture_enabled
            && !media_disallows;
        self.enabled = self.visible && ready_state.has_metadata() && self.pending.is_none();
    }

    /// Disables the trigger and issues the ticket for a new request.
    ///
    /// Returns `None` while the trigger is hidden or disabled.
    pub fn begin(&mut self) -> Option<PipTicket> {
        if !self.visible || !self.enabled {
            return None;
        }
        self.issued = self.issued.wrapping_add(1);
        let ticket = PipTicket(self.issued);
        self.pending = Some(ticket);
        self.enabled = false;
        Some(ticket)
    }

    /// Releases `ticket` and re-enables the trigger.
    ///
    /// Returns false for a stale ticket.
    pub fn settle(&mut self, ticket: PipTicket) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }
        self.pending = None;
        self.enabled = self.visible;
        true
    }

    /// The video entered the picture-in-picture window.
    pub fn entered(&mut self) {
        self.active = true;
    }

    /// The video left the picture-in-picture window.
    pub fn left(&mut self) {
        self.active = false;
        if self.pending.is_none() {
            self.enabled = self.visible;
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// True while the video plays in the picture-in-picture window.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Ticket of the request in flight, if any.
    #[must_use]
    pub fn pending(&self) -> Option<PipTicket> {
        self.pending
    }
}
