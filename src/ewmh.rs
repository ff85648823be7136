//! `Ewmh` uses the [Extended Window Manager Hints (EWMH) specification](https://specifications.freedesktop.org/wm-spec/latest/)
//! as a way to integrate with EWMH compatible window managers. The EWMH spec builds on the lower
//! level Inter Client Communication Conventions Manual (ICCCM) to define interactions between
//! window managers, compositing managers and applications.
//!
//! [Root Window Properties](https://specifications.freedesktop.org/wm-spec/latest/ar01s03.html)
//! Each EWMH field maps to exactly one method here: either a property read decoded into a typed
//! value, or a client message handed to the window manager requesting a change. Requests are
//! fire-and-forget; the window manager never acknowledges them, so callers re-query to observe
//! the effect and must call [`Ewmh::flush`] for queued requests to actually be delivered.
use std::str;

use tracing::debug;

use x11rb::protocol::xproto::{Atom, AtomEnum, GetPropertyReply, Window};

use crate::{
    session::{DisplaySession, XSession},
    ErrorWrapper, EwmhError, EwmhResult, PropertyValue, StateAction, WinAction, WinState, WinType,
};

// Define the second byte of the move resize flags 32bit value
// Used to indicate that the associated value has been changed and needs to be acted upon
pub type MoveResizeWindowFlags = u32;
pub const MOVE_RESIZE_WINDOW_X: MoveResizeWindowFlags = 1 << 8;
pub const MOVE_RESIZE_WINDOW_Y: MoveResizeWindowFlags = 1 << 9;
pub const MOVE_RESIZE_WINDOW_WIDTH: MoveResizeWindowFlags = 1 << 10;
pub const MOVE_RESIZE_WINDOW_HEIGHT: MoveResizeWindowFlags = 1 << 11;

// Source indication word telling the window manager the request came from a
// normal application rather than a pager
const SOURCE_APPLICATION: u32 = 1;

/// Property names with a read mapping in [`Ewmh::get_property`]
pub const READABLE_PROPERTIES: &[&str] = &[
    "_NET_SUPPORTED",
    "_NET_CLIENT_LIST",
    "_NET_CLIENT_LIST_STACKING",
    "_NET_NUMBER_OF_DESKTOPS",
    "_NET_DESKTOP_GEOMETRY",
    "_NET_DESKTOP_VIEWPORT",
    "_NET_CURRENT_DESKTOP",
    "_NET_ACTIVE_WINDOW",
    "_NET_WORKAREA",
    "_NET_SHOWING_DESKTOP",
    "_NET_DESKTOP_NAMES",
    "_NET_VIRTUAL_ROOTS",
    "_NET_WM_NAME",
    "_NET_WM_VISIBLE_NAME",
    "_NET_WM_DESKTOP",
    "_NET_WM_WINDOW_TYPE",
    "_NET_WM_STATE",
    "_NET_WM_ALLOWED_ACTIONS",
    "_NET_WM_PID",
];

/// Property names with a write mapping in [`Ewmh::set_property`]. These are
/// the messages whose payload is a uniform run of 32bit words; window states,
/// move-resize and the UTF8 properties carry shaped arguments and only have
/// typed setters.
pub const WRITABLE_PROPERTIES: &[&str] = &[
    "_NET_NUMBER_OF_DESKTOPS",
    "_NET_DESKTOP_GEOMETRY",
    "_NET_DESKTOP_VIEWPORT",
    "_NET_CURRENT_DESKTOP",
    "_NET_ACTIVE_WINDOW",
    "_NET_SHOWING_DESKTOP",
    "_NET_CLOSE_WINDOW",
    "_NET_WM_DESKTOP",
];

/// The raw outcome of a property read, pending decode into the caller's
/// expected shape. A reply typed NONE means the window manager never set the
/// property and decodes to the recoverable `PropertyNotFound` error.
pub struct GetPropertyResult {
    property: String,
    boxed: EwmhResult<GetPropertyReply>,
}

impl GetPropertyResult {
    fn reply(self) -> EwmhResult<(String, GetPropertyReply)> {
        let reply = self.boxed?;
        if reply.type_ == x11rb::NONE {
            return Err(EwmhError::PropertyNotFound(self.property).into());
        }
        Ok((self.property, reply))
    }
}

impl TryInto<u32> for GetPropertyResult {
    type Error = ErrorWrapper;
    fn try_into(self) -> EwmhResult<u32> {
        let (property, reply) = self.reply()?;
        let mut values = reply.value32().ok_or(EwmhError::InvalidPropertyFormat(property.clone()))?;
        values.next().ok_or_else(|| EwmhError::PropertyNotFound(property).into())
    }
}

impl TryInto<Vec<u32>> for GetPropertyResult {
    type Error = ErrorWrapper;
    fn try_into(self) -> EwmhResult<Vec<u32>> {
        let (property, reply) = self.reply()?;
        let values = reply.value32().ok_or(EwmhError::InvalidPropertyFormat(property))?;
        Ok(values.collect())
    }
}

impl TryInto<String> for GetPropertyResult {
    type Error = ErrorWrapper;
    fn try_into(self) -> EwmhResult<String> {
        let (property, reply) = self.reply()?;
        if reply.format != 8 {
            return Err(EwmhError::InvalidPropertyFormat(property).into());
        }
        Ok(str::from_utf8(&reply.value)?.trim_end_matches('\0').to_owned())
    }
}

impl TryInto<Vec<String>> for GetPropertyResult {
    type Error = ErrorWrapper;
    fn try_into(self) -> EwmhResult<Vec<String>> {
        let (property, reply) = self.reply()?;
        if reply.format != 8 {
            return Err(EwmhError::InvalidPropertyFormat(property).into());
        }
        // Each list entry is null terminated
        Ok(str::from_utf8(&reply.value)?.split('\0').filter(|s| !s.is_empty()).map(|s| s.to_owned()).collect())
    }
}

/// Ewmh provides a simplified access layer to EWMH compatible window managers,
/// one method per property or message the spec defines. It holds only the
/// session handle captured at construction; nothing is cached between calls
/// and every read reflects current server state at the moment of the call.
pub struct Ewmh<S: XSession> {
    session: S,
}

impl Ewmh<DisplaySession> {
    /// Connect to the X server named by `DISPLAY` and wrap the session
    pub fn connect() -> EwmhResult<Self> {
        Ok(Self::new(DisplaySession::connect()?))
    }
}

impl<S: XSession> Ewmh<S> {
    /// Create the facade over an already open session
    pub fn new(session: S) -> Self {
        Self { session }
    }

    /// Get the underlying session
    pub fn session(&self) -> &S {
        &self.session
    }

    /// Get the root window
    pub fn root(&self) -> Window {
        self.session.root()
    }

    /// Deliver all queued requests. Writes only enqueue; nothing reaches the
    /// window manager until this is called.
    pub fn flush(&self) -> EwmhResult<()> {
        self.session.flush()
    }

    fn get<T: Into<Atom>>(&self, win: Window, property: &str, type_: T) -> GetPropertyResult {
        let boxed = self
            .session
            .atom(property)
            .and_then(|atom| self.session.get_property(win, atom, type_.into()));
        GetPropertyResult { property: property.to_owned(), boxed }
    }

    fn get_root<T: Into<Atom>>(&self, property: &str, type_: T) -> GetPropertyResult {
        self.get(self.session.root(), property, type_)
    }

    fn send(&self, target: Window, type_: &str, data: [u32; 5]) -> EwmhResult<()> {
        let atom = self.session.atom(type_)?;
        self.session.send_client_message(target, atom, data)?;
        debug!("send: target: {}, type: {}, data: {:?}", target, type_, data);
        Ok(())
    }

    // ------------------------ root window reads ------------------------

    /// Get the hints the window manager claims to support as a list of atom
    /// names (property `_NET_SUPPORTED`)
    pub fn supported(&self) -> EwmhResult<Vec<String>> {
        let atoms: Vec<u32> = self.get_root("_NET_SUPPORTED", AtomEnum::ATOM).try_into()?;
        atoms.into_iter().map(|a| self.session.atom_name(a)).collect()
    }

    /// Get the windows managed by the window manager in initial mapping order
    /// (property `_NET_CLIENT_LIST`)
    pub fn client_list(&self) -> EwmhResult<Vec<Window>> {
        self.get_root("_NET_CLIENT_LIST", AtomEnum::WINDOW).try_into()
    }

    /// Get the managed windows in bottom-to-top stacking order
    /// (property `_NET_CLIENT_LIST_STACKING`)
    pub fn client_list_stacking(&self) -> EwmhResult<Vec<Window>> {
        self.get_root("_NET_CLIENT_LIST_STACKING", AtomEnum::WINDOW).try_into()
    }

    /// Get the number of virtual desktops (property `_NET_NUMBER_OF_DESKTOPS`)
    pub fn number_of_desktops(&self) -> EwmhResult<u32> {
        self.get_root("_NET_NUMBER_OF_DESKTOPS", AtomEnum::CARDINAL).try_into()
    }

    /// Get the common desktop width and height (property `_NET_DESKTOP_GEOMETRY`)
    pub fn desktop_geometry(&self) -> EwmhResult<(u32, u32)> {
        let values: Vec<u32> = self.get_root("_NET_DESKTOP_GEOMETRY", AtomEnum::CARDINAL).try_into()?;
        match values[..] {
            [w, h, ..] => Ok((w, h)),
            _ => Err(EwmhError::InvalidPropertyFormat("_NET_DESKTOP_GEOMETRY".to_owned()).into()),
        }
    }

    /// Get the top left corner of each desktop's viewport as (x, y) pairs
    /// (property `_NET_DESKTOP_VIEWPORT`)
    pub fn desktop_viewport(&self) -> EwmhResult<Vec<(u32, u32)>> {
        let values: Vec<u32> = self.get_root("_NET_DESKTOP_VIEWPORT", AtomEnum::CARDINAL).try_into()?;
        Ok(values.chunks_exact(2).map(|c| (c[0], c[1])).collect())
    }

    /// Get the index of the current desktop (property `_NET_CURRENT_DESKTOP`)
    pub fn current_desktop(&self) -> EwmhResult<u32> {
        self.get_root("_NET_CURRENT_DESKTOP", AtomEnum::CARDINAL).try_into()
    }

    /// Get the currently active window (property `_NET_ACTIVE_WINDOW`)
    pub fn active_window(&self) -> EwmhResult<Window> {
        self.get_root("_NET_ACTIVE_WINDOW", AtomEnum::WINDOW).try_into()
    }

    /// Get the work area of each desktop as (x, y, width, height) tuples, the
    /// screen minus docks and taskbars (property `_NET_WORKAREA`)
    pub fn work_area(&self) -> EwmhResult<Vec<(u32, u32, u32, u32)>> {
        let values: Vec<u32> = self.get_root("_NET_WORKAREA", AtomEnum::CARDINAL).try_into()?;
        Ok(values.chunks_exact(4).map(|c| (c[0], c[1], c[2], c[3])).collect())
    }

    /// Check whether the window manager is in showing-the-desktop mode
    /// (property `_NET_SHOWING_DESKTOP`)
    pub fn showing_desktop(&self) -> EwmhResult<bool> {
        let value: u32 = self.get_root("_NET_SHOWING_DESKTOP", AtomEnum::CARDINAL).try_into()?;
        Ok(value != 0)
    }

    /// Get the names of the virtual desktops (property `_NET_DESKTOP_NAMES`)
    pub fn desktop_names(&self) -> EwmhResult<Vec<String>> {
        let utf8 = self.session.atom("UTF8_STRING")?;
        self.get_root("_NET_DESKTOP_NAMES", utf8).try_into()
    }

    /// Get the virtual root windows, if the window manager uses any
    /// (property `_NET_VIRTUAL_ROOTS`)
    pub fn virtual_roots(&self) -> EwmhResult<Vec<Window>> {
        self.get_root("_NET_VIRTUAL_ROOTS", AtomEnum::WINDOW).try_into()
    }

    // ------------------------ per window reads ------------------------

    /// Get a window's title (property `_NET_WM_NAME`, UTF8)
    pub fn wm_name(&self, win: Window) -> EwmhResult<String> {
        let utf8 = self.session.atom("UTF8_STRING")?;
        self.get(win, "_NET_WM_NAME", utf8).try_into()
    }

    /// Get the title the window manager actually displays for a window, which
    /// may differ from [`Ewmh::wm_name`] e.g. `xterm <2>`
    /// (property `_NET_WM_VISIBLE_NAME`, UTF8)
    pub fn wm_visible_name(&self, win: Window) -> EwmhResult<String> {
        let utf8 = self.session.atom("UTF8_STRING")?;
        self.get(win, "_NET_WM_VISIBLE_NAME", utf8).try_into()
    }

    /// Get the desktop index a window lives on (property `_NET_WM_DESKTOP`)
    pub fn wm_desktop(&self, win: Window) -> EwmhResult<u32> {
        self.get(win, "_NET_WM_DESKTOP", AtomEnum::CARDINAL).try_into()
    }

    /// Get a window's types in order of preference (property `_NET_WM_WINDOW_TYPE`)
    pub fn wm_window_type(&self, win: Window) -> EwmhResult<Vec<WinType>> {
        let atoms: Vec<u32> = self.get(win, "_NET_WM_WINDOW_TYPE", AtomEnum::ATOM).try_into()?;
        let mut types = vec![];
        for atom in atoms {
            types.push(WinType::from_name(&self.session.atom_name(atom)?));
        }
        debug!("wm_window_type: id: {}, types: {:?}", win, types);
        Ok(types)
    }

    /// Get the states currently applied to a window (property `_NET_WM_STATE`)
    pub fn wm_state(&self, win: Window) -> EwmhResult<Vec<WinState>> {
        let atoms: Vec<u32> = self.get(win, "_NET_WM_STATE", AtomEnum::ATOM).try_into()?;
        let mut states = vec![];
        for atom in atoms {
            states.push(WinState::from_name(&self.session.atom_name(atom)?));
        }
        debug!("wm_state: id: {}, states: {:?}", win, states);
        Ok(states)
    }

    /// Get the actions the window manager allows on a window
    /// (property `_NET_WM_ALLOWED_ACTIONS`)
    pub fn wm_allowed_actions(&self, win: Window) -> EwmhResult<Vec<WinAction>> {
        let atoms: Vec<u32> = self.get(win, "_NET_WM_ALLOWED_ACTIONS", AtomEnum::ATOM).try_into()?;
        let mut actions = vec![];
        for atom in atoms {
            actions.push(WinAction::from_name(&self.session.atom_name(atom)?));
        }
        Ok(actions)
    }

    /// Get the process id of the client owning a window (property `_NET_WM_PID`)
    pub fn wm_pid(&self, win: Window) -> EwmhResult<u32> {
        self.get(win, "_NET_WM_PID", AtomEnum::CARDINAL).try_into()
    }

    /// Get a window's class, which ends up being the application's name
    /// (ICCCM property `WM_CLASS`)
    pub fn wm_class(&self, win: Window) -> EwmhResult<String> {
        let (property, reply) = self.get(win, "WM_CLASS", AtomEnum::STRING).reply()?;
        if reply.format != 8 {
            return Err(EwmhError::InvalidPropertyFormat(property).into());
        }

        // Skip the first null terminated string (the instance) and extract the
        // second (the class)
        let iter = reply.value.into_iter().skip_while(|x| *x != 0).skip(1).take_while(|x| *x != 0);
        let class = str::from_utf8(&iter.collect::<Vec<_>>())?.to_owned();
        debug!("wm_class: id: {}, class: {}", win, class);
        Ok(class)
    }

    // ------------------------ window manager requests ------------------------
    //
    // All of these enqueue a client message addressed to the window manager and
    // return without waiting; EWMH offers no confirmation channel. Call
    // `flush` to deliver, then re-query to observe the effect.

    /// Request that the given window be activated (message `_NET_ACTIVE_WINDOW`)
    pub fn set_active_window(&self, win: Window) -> EwmhResult<()> {
        self.send(win, "_NET_ACTIVE_WINDOW", [SOURCE_APPLICATION, x11rb::CURRENT_TIME, win, 0, 0])
    }

    /// Request that the window manager close the given window gracefully
    /// (message `_NET_CLOSE_WINDOW`)
    pub fn close_window(&self, win: Window) -> EwmhResult<()> {
        self.send(win, "_NET_CLOSE_WINDOW", [x11rb::CURRENT_TIME, SOURCE_APPLICATION, 0, 0, 0])
    }

    /// Request a change to the number of virtual desktops
    /// (message `_NET_NUMBER_OF_DESKTOPS`)
    pub fn set_number_of_desktops(&self, desktops: u32) -> EwmhResult<()> {
        self.send(self.root(), "_NET_NUMBER_OF_DESKTOPS", [desktops, 0, 0, 0, 0])
    }

    /// Request a common desktop size from the window manager
    /// (message `_NET_DESKTOP_GEOMETRY`)
    pub fn set_desktop_geometry(&self, w: u32, h: u32) -> EwmhResult<()> {
        self.send(self.root(), "_NET_DESKTOP_GEOMETRY", [w, h, 0, 0, 0])
    }

    /// Request a viewport change for the current desktop
    /// (message `_NET_DESKTOP_VIEWPORT`)
    pub fn set_desktop_viewport(&self, x: u32, y: u32) -> EwmhResult<()> {
        self.send(self.root(), "_NET_DESKTOP_VIEWPORT", [x, y, 0, 0, 0])
    }

    /// Request a switch to the given desktop (message `_NET_CURRENT_DESKTOP`)
    pub fn set_current_desktop(&self, desktop: u32) -> EwmhResult<()> {
        self.send(self.root(), "_NET_CURRENT_DESKTOP", [desktop, x11rb::CURRENT_TIME, 0, 0, 0])
    }

    /// Request that showing-the-desktop mode be turned on or off
    /// (message `_NET_SHOWING_DESKTOP`)
    pub fn set_showing_desktop(&self, show: bool) -> EwmhResult<()> {
        self.send(self.root(), "_NET_SHOWING_DESKTOP", [show as u32, 0, 0, 0, 0])
    }

    /// Request that a window be moved to the given desktop
    /// (message `_NET_WM_DESKTOP`)
    pub fn set_wm_desktop(&self, win: Window, desktop: u32) -> EwmhResult<()> {
        self.send(win, "_NET_WM_DESKTOP", [desktop, SOURCE_APPLICATION, 0, 0, 0])
    }

    /// Request that one or two states be removed from, added to or toggled on
    /// the given window (message `_NET_WM_STATE`)
    ///
    /// ### Arguments
    /// * `win` - id of the window to manipulate
    /// * `action` - remove, add or toggle
    /// * `state` - the state to change
    /// * `state2` - an optional second state changed in the same request
    pub fn set_wm_state(
        &self, win: Window, action: StateAction, state: WinState, state2: Option<WinState>,
    ) -> EwmhResult<()> {
        let first = self.session.atom(state.name())?;
        let second = match state2 {
            Some(ref state) => self.session.atom(state.name())?,
            None => 0,
        };
        self.send(win, "_NET_WM_STATE", [u32::from(action), first, second, SOURCE_APPLICATION, 0])
    }

    /// Move and resize the given window (message `_NET_MOVERESIZE_WINDOW`)
    ///
    /// ### Arguments
    /// * `win` - id of the window to manipulate
    /// * `gravity` - gravity to use when resizing the window, defaults to NorthWest
    /// * `x` - x coordinate to use for the window during positioning
    /// * `y` - y coordinate to use for the window during positioning
    /// * `w` - width to resize the window to
    /// * `h` - height to resize the window to
    pub fn move_resize_window(
        &self, win: Window, gravity: Option<u32>, x: Option<u32>, y: Option<u32>, w: Option<u32>,
        h: Option<u32>,
    ) -> EwmhResult<()> {
        // Gravity is the lower byte of the flags word. The second byte flags
        // which of x, y, w, h carry a value the window manager should act on.
        let mut flags = gravity.unwrap_or(0);
        if x.is_some() {
            flags |= MOVE_RESIZE_WINDOW_X;
        }
        if y.is_some() {
            flags |= MOVE_RESIZE_WINDOW_Y;
        }
        if w.is_some() {
            flags |= MOVE_RESIZE_WINDOW_WIDTH;
        }
        if h.is_some() {
            flags |= MOVE_RESIZE_WINDOW_HEIGHT;
        }
        self.send(
            win,
            "_NET_MOVERESIZE_WINDOW",
            [flags, x.unwrap_or(0), y.unwrap_or(0), w.unwrap_or(0), h.unwrap_or(0)],
        )
    }

    // ------------------------ direct property writes ------------------------
    //
    // The few properties the spec has clients set directly on their own
    // windows rather than asking the window manager.

    /// Set a window's title (property `_NET_WM_NAME`, UTF8)
    pub fn set_wm_name(&self, win: Window, name: &str) -> EwmhResult<()> {
        let property = self.session.atom("_NET_WM_NAME")?;
        self.session.replace_property_utf8(win, property, name)
    }

    /// Set a window's visible title (property `_NET_WM_VISIBLE_NAME`, UTF8)
    pub fn set_wm_visible_name(&self, win: Window, name: &str) -> EwmhResult<()> {
        let property = self.session.atom("_NET_WM_VISIBLE_NAME")?;
        self.session.replace_property_utf8(win, property, name)
    }

    /// Set a window's types in order of preference (property `_NET_WM_WINDOW_TYPE`)
    pub fn set_wm_window_type(&self, win: Window, types: &[WinType]) -> EwmhResult<()> {
        let property = self.session.atom("_NET_WM_WINDOW_TYPE")?;
        let mut atoms = vec![];
        for typ in types {
            atoms.push(self.session.atom(typ.name())?);
        }
        self.session.replace_property_atoms(win, property, &atoms)
    }

    // ------------------------ dynamic access ------------------------

    /// Get all the readable property names accepted by [`Ewmh::get_property`]
    pub fn readable_properties(&self) -> &'static [&'static str] {
        READABLE_PROPERTIES
    }

    /// Get the value of a property by its EWMH name, decoded into the tagged
    /// [`PropertyValue`] shape the spec declares for it. Root properties
    /// ignore `win`; per window properties fall back to the root window when
    /// `win` is `None`. Unknown names fail validation without touching the
    /// server.
    pub fn get_property(&self, property: &str, win: Option<Window>) -> EwmhResult<PropertyValue> {
        let win = win.unwrap_or_else(|| self.root());
        let value = match property {
            "_NET_SUPPORTED" => PropertyValue::Utf8List(self.supported()?),
            "_NET_CLIENT_LIST" => PropertyValue::Windows(self.client_list()?),
            "_NET_CLIENT_LIST_STACKING" => PropertyValue::Windows(self.client_list_stacking()?),
            "_NET_NUMBER_OF_DESKTOPS" => PropertyValue::Cardinal(self.number_of_desktops()?),
            "_NET_DESKTOP_GEOMETRY" => {
                let (w, h) = self.desktop_geometry()?;
                PropertyValue::Cardinals(vec![w, h])
            },
            "_NET_DESKTOP_VIEWPORT" => {
                let pairs = self.desktop_viewport()?;
                PropertyValue::Cardinals(pairs.into_iter().flat_map(|(x, y)| [x, y]).collect())
            },
            "_NET_CURRENT_DESKTOP" => PropertyValue::Cardinal(self.current_desktop()?),
            "_NET_ACTIVE_WINDOW" => PropertyValue::Window(self.active_window()?),
            "_NET_WORKAREA" => {
                let areas = self.work_area()?;
                PropertyValue::Cardinals(areas.into_iter().flat_map(|(x, y, w, h)| [x, y, w, h]).collect())
            },
            "_NET_SHOWING_DESKTOP" => PropertyValue::Cardinal(self.showing_desktop()? as u32),
            "_NET_DESKTOP_NAMES" => PropertyValue::Utf8List(self.desktop_names()?),
            "_NET_VIRTUAL_ROOTS" => PropertyValue::Windows(self.virtual_roots()?),
            "_NET_WM_NAME" => PropertyValue::Utf8(self.wm_name(win)?),
            "_NET_WM_VISIBLE_NAME" => PropertyValue::Utf8(self.wm_visible_name(win)?),
            "_NET_WM_DESKTOP" => PropertyValue::Cardinal(self.wm_desktop(win)?),
            "_NET_WM_WINDOW_TYPE" => {
                let types = self.wm_window_type(win)?;
                PropertyValue::Utf8List(types.iter().map(|t| t.name().to_owned()).collect())
            },
            "_NET_WM_STATE" => {
                let states = self.wm_state(win)?;
                PropertyValue::Utf8List(states.iter().map(|s| s.name().to_owned()).collect())
            },
            "_NET_WM_ALLOWED_ACTIONS" => {
                let actions = self.wm_allowed_actions(win)?;
                PropertyValue::Utf8List(actions.iter().map(|a| a.to_string()).collect())
            },
            "_NET_WM_PID" => PropertyValue::Cardinal(self.wm_pid(win)?),
            _ => return Err(EwmhError::UnknownProperty(property.to_owned()).into()),
        };
        Ok(value)
    }

    /// Get all the writable property names accepted by [`Ewmh::set_property`]
    pub fn writable_properties(&self) -> &'static [&'static str] {
        WRITABLE_PROPERTIES
    }

    /// Request a property change by its EWMH name, enqueuing the same client
    /// message the corresponding typed method would. Root properties ignore
    /// `win`; per window properties fall back to the root window when `win`
    /// is `None`. Unknown names and payloads with the wrong number of words
    /// fail validation without touching the server.
    pub fn set_property(&self, property: &str, win: Option<Window>, data: &[u32]) -> EwmhResult<()> {
        let win = win.unwrap_or_else(|| self.root());
        match (property, data) {
            ("_NET_NUMBER_OF_DESKTOPS", [n]) => self.set_number_of_desktops(*n),
            ("_NET_DESKTOP_GEOMETRY", [w, h]) => self.set_desktop_geometry(*w, *h),
            ("_NET_DESKTOP_VIEWPORT", [x, y]) => self.set_desktop_viewport(*x, *y),
            ("_NET_CURRENT_DESKTOP", [desktop]) => self.set_current_desktop(*desktop),
            ("_NET_ACTIVE_WINDOW", []) => self.set_active_window(win),
            ("_NET_SHOWING_DESKTOP", [show]) => self.set_showing_desktop(*show != 0),
            ("_NET_CLOSE_WINDOW", []) => self.close_window(win),
            ("_NET_WM_DESKTOP", [desktop]) => self.set_wm_desktop(win, *desktop),
            _ if WRITABLE_PROPERTIES.contains(&property) => {
                Err(EwmhError::InvalidPropertyFormat(property.to_owned()).into())
            },
            _ => Err(EwmhError::UnknownProperty(property.to_owned()).into()),
        }
    }
}
