//! Chrome glyph and default-color slots consumed by the renderer.

use serde::Serialize;

use super::color::{ColorAttr, ColorValue, Hue};

/// Named chrome glyph slot; each holds a fixed number of code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChromeTarget {
    GadgetResize,
    ScrollBarX,
    ScrollBarY,
    TabX,
    TabY,
    ScreenBack,
}

impl ChromeTarget {
    pub const ALL: [ChromeTarget; 6] = [
        Self::GadgetResize,
        Self::ScrollBarX,
        Self::ScrollBarY,
        Self::TabX,
        Self::TabY,
        Self::ScreenBack,
    ];

    /// Name as written in theme files.
    pub fn name(self) -> &'static str {
        match self {
            Self::GadgetResize => "GadgetResize",
            Self::ScrollBarX => "ScrollBarX",
            Self::ScrollBarY => "ScrollBarY",
            Self::TabX => "TabX",
            Self::TabY => "TabY",
            Self::ScreenBack => "ScreenBack",
        }
    }

    /// Number of code points the slot holds.
    pub fn arity(self) -> usize {
        match self {
            Self::GadgetResize | Self::ScreenBack => 2,
            Self::ScrollBarX | Self::ScrollBarY => 3,
            Self::TabX | Self::TabY => 1,
        }
    }

    pub fn from_name(name: &[u8]) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|target| name.eq_ignore_ascii_case(target.name().as_bytes()))
    }
}

/// Named default-color slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTarget {
    Gadgets,
    Arrows,
    Bars,
    Tabs,
    Border,
    Disabled,
    SelectDisabled,
}

impl ColorTarget {
    pub const ALL: [ColorTarget; 7] = [
        Self::Gadgets,
        Self::Arrows,
        Self::Bars,
        Self::Tabs,
        Self::Border,
        Self::Disabled,
        Self::SelectDisabled,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Gadgets => "Gadgets",
            Self::Arrows => "Arrows",
            Self::Bars => "Bars",
            Self::Tabs => "Tabs",
            Self::Border => "Border",
            Self::Disabled => "Disabled",
            Self::SelectDisabled => "SelectDisabled",
        }
    }

    pub fn from_name(name: &[u8]) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|target| name.eq_ignore_ascii_case(target.name().as_bytes()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChromeGlyphs {
    pub gadget_resize: [char; 2],
    pub scroll_bar_x: [char; 3],
    pub scroll_bar_y: [char; 3],
    pub tab_x: [char; 1],
    pub tab_y: [char; 1],
    pub screen_back: [char; 2],
}

impl Default for ChromeGlyphs {
    fn default() -> Self {
        Self {
            gadget_resize: ['═', '╝'],
            scroll_bar_x: ['▒', '◄', '►'],
            scroll_bar_y: ['▒', '▲', '▼'],
            tab_x: ['█'],
            tab_y: ['█'],
            screen_back: ['▒', '▒'],
        }
    }
}

impl ChromeGlyphs {
    pub fn get(&self, target: ChromeTarget) -> &[char] {
        match target {
            ChromeTarget::GadgetResize => &self.gadget_resize,
            ChromeTarget::ScrollBarX => &self.scroll_bar_x,
            ChromeTarget::ScrollBarY => &self.scroll_bar_y,
            ChromeTarget::TabX => &self.tab_x,
            ChromeTarget::TabY => &self.tab_y,
            ChromeTarget::ScreenBack => &self.screen_back,
        }
    }

    /// Mutable view of a slot; its length always equals `target.arity()`.
    pub(crate) fn get_mut(&mut self, target: ChromeTarget) -> &mut [char] {
        match target {
            ChromeTarget::GadgetResize => &mut self.gadget_resize,
            ChromeTarget::ScrollBarX => &mut self.scroll_bar_x,
            ChromeTarget::ScrollBarY => &mut self.scroll_bar_y,
            ChromeTarget::TabX => &mut self.tab_x,
            ChromeTarget::TabY => &mut self.tab_y,
            ChromeTarget::ScreenBack => &mut self.screen_back,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DefaultColors {
    pub gadgets: ColorAttr,
    pub arrows: ColorAttr,
    pub bars: ColorAttr,
    pub tabs: ColorAttr,
    pub border: ColorAttr,
    pub disabled: ColorAttr,
    pub select_disabled: ColorAttr,
}

impl Default for DefaultColors {
    fn default() -> Self {
        let on_blue = |fg| ColorAttr::new(fg, ColorValue::normal(Hue::Blue));
        Self {
            gadgets: on_blue(ColorValue::bright(Hue::Green)),
            arrows: on_blue(ColorValue::bright(Hue::Green)),
            bars: on_blue(ColorValue::normal(Hue::Cyan)),
            tabs: on_blue(ColorValue::bright(Hue::White)),
            border: on_blue(ColorValue::bright(Hue::White)),
            disabled: ColorAttr::new(
                ColorValue::bright(Hue::Black),
                ColorValue::normal(Hue::Black),
            ),
            select_disabled: ColorAttr::new(
                ColorValue::normal(Hue::Black),
                ColorValue::normal(Hue::White),
            ),
        }
    }
}

impl DefaultColors {
    pub fn get(&self, target: ColorTarget) -> ColorAttr {
        match target {
            ColorTarget::Gadgets => self.gadgets,
            ColorTarget::Arrows => self.arrows,
            ColorTarget::Bars => self.bars,
            ColorTarget::Tabs => self.tabs,
            ColorTarget::Border => self.border,
            ColorTarget::Disabled => self.disabled,
            ColorTarget::SelectDisabled => self.select_disabled,
        }
    }

    pub(crate) fn set(&mut self, target: ColorTarget, color: ColorAttr) {
        let slot = match target {
            ColorTarget::Gadgets => &mut self.gadgets,
            ColorTarget::Arrows => &mut self.arrows,
            ColorTarget::Bars => &mut self.bars,
            ColorTarget::Tabs => &mut self.tabs,
            ColorTarget::Border => &mut self.border,
            ColorTarget::Disabled => &mut self.disabled,
            ColorTarget::SelectDisabled => &mut self.select_disabled,
        };
        *slot = color;
    }
}

/// Everything a theme file can change. `Default` is the built-in theme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ThemeState {
    pub chrome: ChromeGlyphs,
    pub colors: DefaultColors,
}

impl ThemeState {
    pub fn glyphs(&self, target: ChromeTarget) -> &[char] {
        self.chrome.get(target)
    }

    pub fn color(&self, target: ColorTarget) -> ColorAttr {
        self.colors.get(target)
    }
}
