//! Divider resolution.
//!
//! Maps an item's divider classification plus the adapter's container-level
//! configuration to a concrete show/hide/configure action on a row's divider
//! slots. The decision itself is a pure function ([`decide`]); [`resolve`]
//! is the thin imperative shell that applies it to a live row.

use std::sync::Arc;

use crate::model::DividerKind;

use super::traits::{DividerSlot, DividerView, RowHandle};

/// Builds a divider sub-view. Invoked at most once per (row, slot).
pub type DividerBuilder = Arc<dyn Fn() -> Box<dyn DividerView> + Send + Sync>;

/// Configures a divider sub-view each time its row is resolved.
pub type DividerConfigurer = Arc<dyn Fn(&mut dyn DividerView) + Send + Sync>;

/// Container-level divider configuration held by the adapter.
#[derive(Clone, Default)]
pub struct DividerConfig {
    /// Builder for the between-rows divider.
    pub row_builder: Option<DividerBuilder>,
    /// Configurer for the between-rows divider.
    pub row_configurer: Option<DividerConfigurer>,
    /// Builder for the section-header divider.
    pub section_header_builder: Option<DividerBuilder>,
    /// Configurer for the section-header divider.
    pub section_header_configurer: Option<DividerConfigurer>,
}

impl DividerConfig {
    fn builder(&self, slot: DividerSlot) -> Option<&DividerBuilder> {
        match slot {
            DividerSlot::Row => self.row_builder.as_ref(),
            DividerSlot::SectionHeader => self.section_header_builder.as_ref(),
        }
    }

    fn configurer(&self, slot: DividerSlot) -> Option<&DividerConfigurer> {
        match slot {
            DividerSlot::Row => self.row_configurer.as_ref(),
            DividerSlot::SectionHeader => self.section_header_configurer.as_ref(),
        }
    }
}

/// The outcome of divider resolution for one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DividerDecision {
    /// Hide any divider the row may have.
    Hide,
    /// Show and configure the divider in the given slot.
    Show(DividerSlot),
}

/// Decides what to do with a row's divider.
///
/// Pure: the same inputs always yield the same decision.
///
/// - `None` classification is hidden, unless `shows_last_divider` promotes
///   it to a row divider.
/// - A classification whose builder is absent falls back to hidden; a
///   missing builder is a configuration gap, not an error, regardless of
///   configurer presence.
pub fn decide(
    kind: DividerKind,
    shows_last_divider: bool,
    has_row_builder: bool,
    has_section_header_builder: bool,
) -> DividerDecision {
    let effective = match kind {
        DividerKind::None if shows_last_divider => DividerKind::Row,
        other => other,
    };
    match effective {
        DividerKind::None => DividerDecision::Hide,
        DividerKind::Row if has_row_builder => DividerDecision::Show(DividerSlot::Row),
        DividerKind::SectionHeader if has_section_header_builder => {
            DividerDecision::Show(DividerSlot::SectionHeader)
        }
        _ => DividerDecision::Hide,
    }
}

/// Applies the divider decision for `kind` to a live row.
///
/// Construction is memoized per (row, slot): the first `Show` resolution
/// builds the view through the configured builder and installs it on the
/// row; later resolutions reuse the installed view. The configurer runs on
/// every `Show` resolution. The opposite slot's view, if built earlier, is
/// hidden so a reclassified row never shows both.
pub(crate) fn resolve(
    row: &mut dyn RowHandle,
    kind: DividerKind,
    shows_last_divider: bool,
    config: &DividerConfig,
) {
    let decision = decide(
        kind,
        shows_last_divider,
        config.row_builder.is_some(),
        config.section_header_builder.is_some(),
    );

    match decision {
        DividerDecision::Hide => {
            hide_slot(row, DividerSlot::Row);
            hide_slot(row, DividerSlot::SectionHeader);
        }
        DividerDecision::Show(slot) => {
            hide_slot(row, slot.other());
            if row.divider(slot).is_none()
                && let Some(builder) = config.builder(slot)
            {
                row.install_divider(slot, builder());
            }
            if let Some(view) = row.divider(slot) {
                view.set_visible(true);
                if let Some(configurer) = config.configurer(slot) {
                    configurer(view);
                }
            }
        }
    }
}

fn hide_slot(row: &mut dyn RowHandle, slot: DividerSlot) {
    if let Some(view) = row.divider(slot) {
        view.set_visible(false);
    }
}
