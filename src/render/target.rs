// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Render targets: named output slots the renderers write into.
//!
//! Renderers never look elements up by hand. They name a [`Slot`] and hand
//! a closure to [`RenderTarget::render_into`], which runs it against every
//! element registered under that slot's ids and does nothing when none is.

use serde::Serialize;
use std::collections::BTreeMap;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Output slots of the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    CallToAction,
    UserBox,
    UserStatus,
    UserName,
    UserId,
    UserAvatar,
    UsageBox,
    UsageTotal,
    UsageDaily,
    UsageHourly,
}

impl Slot {
    pub const ALL: [Slot; 10] = [
        Slot::CallToAction,
        Slot::UserBox,
        Slot::UserStatus,
        Slot::UserName,
        Slot::UserId,
        Slot::UserAvatar,
        Slot::UsageBox,
        Slot::UsageTotal,
        Slot::UsageDaily,
        Slot::UsageHourly,
    ];

    /// Element ids this slot answers to. The first one is canonical.
    pub fn element_ids(self) -> &'static [&'static str] {
        match self {
            Slot::CallToAction => &["login-box", "cta-area"],
            Slot::UserBox => &["user-box"],
            Slot::UserStatus => &["user-status"],
            Slot::UserName => &["user-name"],
            Slot::UserId => &["user-id"],
            Slot::UserAvatar => &["user-avatar"],
            Slot::UsageBox => &["usage-box"],
            Slot::UsageTotal => &["usage-total"],
            Slot::UsageDaily => &["usage-daily"],
            Slot::UsageHourly => &["usage-hourly"],
        }
    }

    pub fn id(self) -> &'static str {
        self.element_ids()[0]
    }
}

/// One bar of a bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Bar {
    pub label: String,
    /// Height as a percentage of the chart, 0-100
    pub height_pct: f64,
    pub tooltip: String,
}

/// Rendered state of one element.
///
/// `None` means "left as the host page had it".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Element {
    pub visible: Option<bool>,
    pub text: Option<String>,
    pub title: Option<String>,
    pub src: Option<String>,
    pub alt: Option<String>,
    pub bars: Vec<Bar>,
    /// Inline message that replaces the element's content
    pub message: Option<String>,
}

impl Element {
    pub fn show(&mut self) {
        self.visible = Some(true);
    }

    pub fn hide(&mut self) {
        self.visible = Some(false);
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub fn set_image(&mut self, src: impl Into<String>, alt: impl Into<String>) {
        self.src = Some(src.into());
        self.alt = Some(alt.into());
    }

    /// Clear prior bars and draw the new ones.
    pub fn replace_bars(&mut self, bars: Vec<Bar>) {
        self.bars = bars;
    }

    pub fn show_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }
}

/// Something renderers can write into.
pub trait RenderTarget {
    /// Element registered under `id`, if the page has one.
    fn element_mut(&mut self, id: &str) -> Option<&mut Element>;

    /// Apply `f` to every present element of `slot`.
    ///
    /// Returns false, and changes nothing, when the page has no element for
    /// the slot.
    fn render_into<F>(&mut self, slot: Slot, mut f: F) -> bool
    where
        F: FnMut(&mut Element),
        Self: Sized,
    {
        let mut found = false;
        for id in slot.element_ids() {
            if let Some(element) = self.element_mut(id) {
                f(element);
                found = true;
            }
        }
        if !found {
            tracing::trace!(slot = slot.id(), "Slot not present, skipping");
        }
        found
    }
}

/// In-memory page: element id to element state.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Document {
    elements: BTreeMap<String, Element>,
}

impl Document {
    /// A page with every slot present under its canonical id.
    pub fn host_page() -> Self {
        Self::with_ids(Slot::ALL.iter().map(|slot| slot.id()))
    }

    /// A page holding exactly the given element ids.
    pub fn with_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            elements: ids
                .into_iter()
                .map(|id| (id.into(), Element::default()))
                .collect(),
        }
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    /// First present element of `slot`.
    pub fn slot(&self, slot: Slot) -> Option<&Element> {
        slot.element_ids().iter().find_map(|id| self.element(id))
    }
}

impl RenderTarget for Document {
    fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }
}
