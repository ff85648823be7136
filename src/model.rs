use std::{convert, fmt};

use crate::EwmhError;

/// PropertyValue is the decoded result of a property read. Every property the
/// window manager maintains decodes into exactly one of these shapes so that
/// callers pattern match rather than juggle dynamically typed returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    /// A single window id e.g. `_NET_ACTIVE_WINDOW`
    Window(u32),
    /// An ordered list of window ids e.g. `_NET_CLIENT_LIST`
    Windows(Vec<u32>),
    /// A single 32bit integer e.g. `_NET_CURRENT_DESKTOP`
    Cardinal(u32),
    /// An ordered list of 32bit integers e.g. `_NET_DESKTOP_VIEWPORT`
    Cardinals(Vec<u32>),
    /// A UTF8 string e.g. `_NET_WM_NAME`
    Utf8(String),
    /// A list of UTF8 strings e.g. `_NET_DESKTOP_NAMES`
    Utf8List(Vec<String>),
}

/// StateAction is the action word of a `_NET_WM_STATE` client message as
/// defined by the EWMH spec i.e. remove=0, add=1, toggle=2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateAction {
    Remove,
    Add,
    Toggle,
}

// Implement format! support
impl fmt::Display for StateAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_lowercase())
    }
}

impl From<StateAction> for u32 {
    fn from(val: StateAction) -> Self {
        match val {
            StateAction::Remove => 0,
            StateAction::Add => 1,
            StateAction::Toggle => 2,
        }
    }
}

// Convert from u32 to StateAction
impl convert::TryFrom<u32> for StateAction {
    type Error = EwmhError;

    fn try_from(val: u32) -> Result<Self, Self::Error> {
        match val {
            0 => Ok(StateAction::Remove),
            1 => Ok(StateAction::Add),
            2 => Ok(StateAction::Toggle),
            _ => Err(EwmhError::UnknownStateAction(val)),
        }
    }
}

/// WinState provides an easy way to identify the different window states
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WinState {
    Above,
    Below,
    DemandsAttention,
    Focused,
    Fullscreen,
    Hidden,
    MaxVert,
    MaxHorz,
    Modal,
    Shaded,
    SkipPager,
    SkipTaskbar,
    Sticky,
    Other(String),
}

impl WinState {
    /// Get the `_NET_WM_STATE_*` atom name for this state
    pub fn name(&self) -> &str {
        match self {
            WinState::Above => "_NET_WM_STATE_ABOVE",
            WinState::Below => "_NET_WM_STATE_BELOW",
            WinState::DemandsAttention => "_NET_WM_STATE_DEMANDS_ATTENTION",
            WinState::Focused => "_NET_WM_STATE_FOCUSED",
            WinState::Fullscreen => "_NET_WM_STATE_FULLSCREEN",
            WinState::Hidden => "_NET_WM_STATE_HIDDEN",
            WinState::MaxVert => "_NET_WM_STATE_MAXIMIZED_VERT",
            WinState::MaxHorz => "_NET_WM_STATE_MAXIMIZED_HORZ",
            WinState::Modal => "_NET_WM_STATE_MODAL",
            WinState::Shaded => "_NET_WM_STATE_SHADED",
            WinState::SkipPager => "_NET_WM_STATE_SKIP_PAGER",
            WinState::SkipTaskbar => "_NET_WM_STATE_SKIP_TASKBAR",
            WinState::Sticky => "_NET_WM_STATE_STICKY",
            WinState::Other(name) => name,
        }
    }

    /// Decode an atom name into a state, keeping unknown names as `Other` so
    /// that reads never fail on window manager specific extensions.
    pub fn from_name(name: &str) -> WinState {
        WinState::try_from(name).unwrap_or_else(|_| WinState::Other(name.to_owned()))
    }
}

// Convert from &str to WinState rejecting names outside the spec catalog
impl convert::TryFrom<&str> for WinState {
    type Error = EwmhError;

    fn try_from(val: &str) -> Result<Self, Self::Error> {
        match val {
            "_NET_WM_STATE_ABOVE" => Ok(WinState::Above),
            "_NET_WM_STATE_BELOW" => Ok(WinState::Below),
            "_NET_WM_STATE_DEMANDS_ATTENTION" => Ok(WinState::DemandsAttention),
            "_NET_WM_STATE_FOCUSED" => Ok(WinState::Focused),
            "_NET_WM_STATE_FULLSCREEN" => Ok(WinState::Fullscreen),
            "_NET_WM_STATE_HIDDEN" => Ok(WinState::Hidden),
            "_NET_WM_STATE_MAXIMIZED_VERT" => Ok(WinState::MaxVert),
            "_NET_WM_STATE_MAXIMIZED_HORZ" => Ok(WinState::MaxHorz),
            "_NET_WM_STATE_MODAL" => Ok(WinState::Modal),
            "_NET_WM_STATE_SHADED" => Ok(WinState::Shaded),
            "_NET_WM_STATE_SKIP_PAGER" => Ok(WinState::SkipPager),
            "_NET_WM_STATE_SKIP_TASKBAR" => Ok(WinState::SkipTaskbar),
            "_NET_WM_STATE_STICKY" => Ok(WinState::Sticky),
            _ => Err(EwmhError::UnknownStateAtom(val.to_string())),
        }
    }
}

// Convert from String to WinState
impl convert::TryFrom<String> for WinState {
    type Error = EwmhError;

    fn try_from(val: String) -> Result<Self, Self::Error> {
        WinState::try_from(val.as_str())
    }
}

// Implement format! support
impl fmt::Display for WinState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WinState::Other(name) => write!(f, "{}", name),
            _ => write!(f, "{}", format!("{:?}", self).to_lowercase()),
        }
    }
}

/// WinType provides an easy way to identify the different window types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WinType {
    Combo,
    Desktop,
    Dialog,
    DND,
    Dock,
    DropDownMenu,
    Menu,
    Normal,
    Notification,
    PopupMenu,
    Splash,
    Toolbar,
    ToolTip,
    Utility,
    Other(String),
}

impl WinType {
    /// Get the `_NET_WM_WINDOW_TYPE_*` atom name for this type
    pub fn name(&self) -> &str {
        match self {
            WinType::Combo => "_NET_WM_WINDOW_TYPE_COMBO",
            WinType::Desktop => "_NET_WM_WINDOW_TYPE_DESKTOP",
            WinType::Dialog => "_NET_WM_WINDOW_TYPE_DIALOG",
            WinType::DND => "_NET_WM_WINDOW_TYPE_DND",
            WinType::Dock => "_NET_WM_WINDOW_TYPE_DOCK",
            WinType::DropDownMenu => "_NET_WM_WINDOW_TYPE_DROPDOWN_MENU",
            WinType::Menu => "_NET_WM_WINDOW_TYPE_MENU",
            WinType::Normal => "_NET_WM_WINDOW_TYPE_NORMAL",
            WinType::Notification => "_NET_WM_WINDOW_TYPE_NOTIFICATION",
            WinType::PopupMenu => "_NET_WM_WINDOW_TYPE_POPUP_MENU",
            WinType::Splash => "_NET_WM_WINDOW_TYPE_SPLASH",
            WinType::Toolbar => "_NET_WM_WINDOW_TYPE_TOOLBAR",
            WinType::ToolTip => "_NET_WM_WINDOW_TYPE_TOOLTIP",
            WinType::Utility => "_NET_WM_WINDOW_TYPE_UTILITY",
            WinType::Other(name) => name,
        }
    }

    /// Decode an atom name into a type, keeping unknown names as `Other`
    pub fn from_name(name: &str) -> WinType {
        WinType::try_from(name).unwrap_or_else(|_| WinType::Other(name.to_owned()))
    }
}

// Convert from &str to WinType rejecting names outside the spec catalog
impl convert::TryFrom<&str> for WinType {
    type Error = EwmhError;

    fn try_from(val: &str) -> Result<Self, Self::Error> {
        match val {
            "_NET_WM_WINDOW_TYPE_COMBO" => Ok(WinType::Combo),
            "_NET_WM_WINDOW_TYPE_DESKTOP" => Ok(WinType::Desktop),
            "_NET_WM_WINDOW_TYPE_DIALOG" => Ok(WinType::Dialog),
            "_NET_WM_WINDOW_TYPE_DND" => Ok(WinType::DND),
            "_NET_WM_WINDOW_TYPE_DOCK" => Ok(WinType::Dock),
            "_NET_WM_WINDOW_TYPE_DROPDOWN_MENU" => Ok(WinType::DropDownMenu),
            "_NET_WM_WINDOW_TYPE_MENU" => Ok(WinType::Menu),
            "_NET_WM_WINDOW_TYPE_NORMAL" => Ok(WinType::Normal),
            "_NET_WM_WINDOW_TYPE_NOTIFICATION" => Ok(WinType::Notification),
            "_NET_WM_WINDOW_TYPE_POPUP_MENU" => Ok(WinType::PopupMenu),
            "_NET_WM_WINDOW_TYPE_SPLASH" => Ok(WinType::Splash),
            "_NET_WM_WINDOW_TYPE_TOOLBAR" => Ok(WinType::Toolbar),
            "_NET_WM_WINDOW_TYPE_TOOLTIP" => Ok(WinType::ToolTip),
            "_NET_WM_WINDOW_TYPE_UTILITY" => Ok(WinType::Utility),
            _ => Err(EwmhError::UnknownWindowType(val.to_string())),
        }
    }
}

// Convert from String to WinType
impl convert::TryFrom<String> for WinType {
    type Error = EwmhError;

    fn try_from(val: String) -> Result<Self, Self::Error> {
        WinType::try_from(val.as_str())
    }
}

// Implement format! support
impl fmt::Display for WinType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WinType::Other(name) => write!(f, "{}", name),
            _ => write!(f, "{}", format!("{:?}", self).to_lowercase()),
        }
    }
}

/// WinAction identifies the operations the window manager allows on a window
/// as reported by `_NET_WM_ALLOWED_ACTIONS`. Decode only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WinAction {
    Above,
    Below,
    ChangeDesktop,
    Close,
    Fullscreen,
    MaxHorz,
    MaxVert,
    Minimize,
    Move,
    Resize,
    Shade,
    Stick,
    Other(String),
}

impl WinAction {
    /// Decode an atom name into an allowed action, keeping unknown names as `Other`
    pub fn from_name(name: &str) -> WinAction {
        match name {
            "_NET_WM_ACTION_ABOVE" => WinAction::Above,
            "_NET_WM_ACTION_BELOW" => WinAction::Below,
            "_NET_WM_ACTION_CHANGE_DESKTOP" => WinAction::ChangeDesktop,
            "_NET_WM_ACTION_CLOSE" => WinAction::Close,
            "_NET_WM_ACTION_FULLSCREEN" => WinAction::Fullscreen,
            "_NET_WM_ACTION_MAXIMIZE_HORZ" => WinAction::MaxHorz,
            "_NET_WM_ACTION_MAXIMIZE_VERT" => WinAction::MaxVert,
            "_NET_WM_ACTION_MINIMIZE" => WinAction::Minimize,
            "_NET_WM_ACTION_MOVE" => WinAction::Move,
            "_NET_WM_ACTION_RESIZE" => WinAction::Resize,
            "_NET_WM_ACTION_SHADE" => WinAction::Shade,
            "_NET_WM_ACTION_STICK" => WinAction::Stick,
            _ => WinAction::Other(name.to_owned()),
        }
    }
}

// Implement format! support
impl fmt::Display for WinAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WinAction::Other(name) => write!(f, "{}", name),
            _ => write!(f, "{}", format!("{:?}", self).to_lowercase()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_action_words_match_the_message_convention() {
        assert_eq!(u32::from(StateAction::Remove), 0);
        assert_eq!(u32::from(StateAction::Add), 1);
        assert_eq!(u32::from(StateAction::Toggle), 2);
        assert_eq!(StateAction::try_from(2).unwrap(), StateAction::Toggle);
        assert!(StateAction::try_from(3).is_err());
    }

    #[test]
    fn win_state_round_trips_through_atom_names() {
        for state in [WinState::Fullscreen, WinState::MaxHorz, WinState::SkipTaskbar, WinState::Sticky] {
            assert_eq!(WinState::from_name(state.name()), state);
        }
        assert!(WinState::try_from("_NET_WM_STATE_BOGUS").is_err());
        assert_eq!(
            WinState::from_name("_COMPIZ_WM_STATE_WOBBLY"),
            WinState::Other("_COMPIZ_WM_STATE_WOBBLY".to_owned())
        );
    }

    #[test]
    fn win_type_round_trips_through_atom_names() {
        for typ in [WinType::Normal, WinType::Dialog, WinType::DropDownMenu] {
            assert_eq!(WinType::from_name(typ.name()), typ);
        }
        assert!(WinType::try_from("_NET_WM_WINDOW_TYPE_BOGUS").is_err());
    }

    #[test]
    fn win_action_decodes_known_and_unknown_names() {
        assert_eq!(WinAction::from_name("_NET_WM_ACTION_CLOSE"), WinAction::Close);
        assert_eq!(WinAction::from_name("_OB_WM_ACTION_UNDECORATE"), WinAction::Other("_OB_WM_ACTION_UNDECORATE".to_owned()));
    }
}
