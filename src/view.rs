use std::str::FromStr;

use crate::error::{Error, Result};
use crate::finder::ScrollIntent;

/// Which of the two mutually exclusive presentations is on screen.
/// Picked by the viewport breakpoint, never by finder state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    VerticalList,
    HorizontalStrip,
}

impl FromStr for Layout {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw {
            "list" => Ok(Layout::VerticalList),
            "strip" => Ok(Layout::HorizontalStrip),
            _ => Err(Error::BadLayout {
                raw: raw.to_owned(),
            }),
        }
    }
}

/// Geometry of one rendered card, relative to the top of its scroll
/// container's viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardHandle {
    pub top: f64,
    pub height: f64,
}

/// Rendering layer's id-to-handle mapping. The finder core only ever
/// names unit ids; the concrete geometry stays on this side.
#[derive(Debug, Default)]
pub struct CardArena {
    slots: Vec<(u32, CardHandle)>,
}

impl CardArena {
    pub fn new() -> Self {
        CardArena { slots: Vec::new() }
    }

    /// Registers (or replaces) the card rendered for a unit.
    pub fn place(&mut self, id: u32, handle: CardHandle) {
        if let Some(slot) = self.slots.iter_mut().find(|(slot_id, _)| *slot_id == id) {
            slot.1 = handle;
        } else {
            self.slots.push((id, handle));
        }
    }

    pub fn get(&self, id: u32) -> Option<CardHandle> {
        self.slots
            .iter()
            .find(|(slot_id, _)| *slot_id == id)
            .map(|&(_, handle)| handle)
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// The vertical list scrolls inside its own container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ListViewport {
    pub height: f64,
    pub scroll_top: f64,
}

/// Concrete scroll instruction for the platform layer to animate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollCommand {
    /// Scroll the list container to this offset, centering the card.
    VerticalTo(f64),
    /// Center the card along the strip's horizontal axis.
    CenterHorizontal(u32),
}

/// Resolves a scroll intent against whatever is actually rendered. A
/// card the active search filtered out yields no command: filtering and
/// selection are independent concerns and are not reconciled here.
pub fn bring_into_view(
    intent: ScrollIntent,
    layout: Layout,
    arena: &CardArena,
    viewport: ListViewport,
) -> Option<ScrollCommand> {
    let card = arena.get(intent.unit_id)?;
    match layout {
        Layout::VerticalList => {
            let offset = card.top + viewport.scroll_top;
            let center = (viewport.height - card.height) / 2.0;
            Some(ScrollCommand::VerticalTo(offset - center))
        }
        Layout::HorizontalStrip => Some(ScrollCommand::CenterHorizontal(intent.unit_id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena_with(id: u32, top: f64) -> CardArena {
        let mut arena = CardArena::new();
        arena.place(id, CardHandle { top, height: 72.0 });
        arena
    }

    const VIEWPORT: ListViewport = ListViewport {
        height: 400.0,
        scroll_top: 0.0,
    };

    #[test]
    fn vertical_layout_centers_the_card() {
        let arena = arena_with(5, 300.0);
        let intent = ScrollIntent { unit_id: 5 };
        let cmd = bring_into_view(intent, Layout::VerticalList, &arena, VIEWPORT);
        // 300 - (400 - 72) / 2
        assert_eq!(cmd, Some(ScrollCommand::VerticalTo(136.0)));
    }

    #[test]
    fn scrolled_container_offsets_accumulate() {
        let arena = arena_with(5, 300.0);
        let viewport = ListViewport {
            height: 400.0,
            scroll_top: 100.0,
        };
        let cmd = bring_into_view(ScrollIntent { unit_id: 5 }, Layout::VerticalList, &arena, viewport);
        assert_eq!(cmd, Some(ScrollCommand::VerticalTo(236.0)));
    }

    #[test]
    fn strip_layout_delegates_horizontal_centering() {
        let arena = arena_with(9, 0.0);
        let cmd = bring_into_view(ScrollIntent { unit_id: 9 }, Layout::HorizontalStrip, &arena, VIEWPORT);
        assert_eq!(cmd, Some(ScrollCommand::CenterHorizontal(9)));
    }

    #[test]
    fn missing_card_is_a_silent_no_op() {
        let arena = arena_with(5, 300.0);
        for layout in &[Layout::VerticalList, Layout::HorizontalStrip] {
            assert_eq!(bring_into_view(ScrollIntent { unit_id: 6 }, *layout, &arena, VIEWPORT), None);
        }
    }

    #[test]
    fn placing_twice_replaces_the_handle() {
        let mut arena = arena_with(5, 300.0);
        arena.place(5, CardHandle { top: 10.0, height: 72.0 });
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.get(5).map(|h| h.top), Some(10.0));
    }

    #[test]
    fn layout_parses_from_cli_names() {
        assert_eq!("list".parse::<Layout>().unwrap(), Layout::VerticalList);
        assert_eq!("strip".parse::<Layout>().unwrap(), Layout::HorizontalStrip);
        assert!("grid".parse::<Layout>().is_err());
    }
}
