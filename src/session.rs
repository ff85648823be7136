//! The session is the protocol collaborator the facade talks to. Everything
//! hard lives behind it: connection management, atom interning, property
//! serialization and event delivery are all `x11rb`'s job. The facade only
//! needs the handful of operations captured by [`XSession`], which also gives
//! tests a seam to substitute a scripted server.
use std::{cell::RefCell, collections::HashMap, str};

use tracing::{debug, trace};

use x11rb::{
    connection::Connection,
    protocol::xproto::{
        Atom, AtomEnum, ClientMessageEvent, ConnectionExt as _, EventMask, GetPropertyReply, PropMode,
        Window,
    },
    rust_connection::RustConnection,
    wrapper::ConnectionExt as _,
};

use crate::EwmhResult;

/// The operations the facade consumes from an open display session.
///
/// Client message sends and property writes are enqueued in the session's
/// outgoing buffer only; nothing reaches the window manager until the caller
/// invokes [`XSession::flush`]. Reads are a blocking round trip.
pub trait XSession {
    /// Root window of the session's default screen
    fn root(&self) -> Window;

    /// Resolve an atom by name, interning it on the server if needed
    fn atom(&self, name: &str) -> EwmhResult<Atom>;

    /// Reverse lookup of an atom's name
    fn atom_name(&self, atom: Atom) -> EwmhResult<String>;

    /// Read a property from the given window, returning the raw reply.
    /// A reply with type NONE means the property is not set.
    fn get_property(&self, win: Window, property: Atom, type_: Atom) -> EwmhResult<GetPropertyReply>;

    /// Enqueue a 32bit format client message addressed to the window manager
    /// via the root window with the substructure redirect/notify mask.
    fn send_client_message(&self, target: Window, type_: Atom, data: [u32; 5]) -> EwmhResult<()>;

    /// Enqueue a direct replacement of a UTF8 property
    fn replace_property_utf8(&self, win: Window, property: Atom, value: &str) -> EwmhResult<()>;

    /// Enqueue a direct replacement of an ATOM list property
    fn replace_property_atoms(&self, win: Window, property: Atom, atoms: &[Atom]) -> EwmhResult<()>;

    /// Deliver everything enqueued in the outgoing buffer
    fn flush(&self) -> EwmhResult<()>;
}

/// DisplaySession implements [`XSession`] over an `x11rb` connection to the
/// X server named by `DISPLAY`. Atoms are cached by name after the first
/// interning round trip. The session never closes the connection itself;
/// dropping it is the caller's concern.
pub struct DisplaySession {
    conn: RustConnection,                  // x11 connection
    screen: usize,                         // screen number
    root: Window,                          // root window id
    atoms: RefCell<HashMap<String, Atom>>, // name -> atom cache
    names: RefCell<HashMap<Atom, String>>, // atom -> name cache
}

impl DisplaySession {
    /// Connect to the X server and capture the default screen's root window
    pub fn connect() -> EwmhResult<Self> {
        let (conn, screen) = x11rb::connect(None)?;
        let root = conn.setup().roots[screen].root;
        debug!("connect: screen: {}, root: {}", screen, root);
        Ok(Self {
            conn,
            screen,
            root,
            atoms: RefCell::new(HashMap::new()),
            names: RefCell::new(HashMap::new()),
        })
    }

    /// Get the default screen number
    pub fn screen(&self) -> usize {
        self.screen
    }
}

impl XSession for DisplaySession {
    fn root(&self) -> Window {
        self.root
    }

    fn atom(&self, name: &str) -> EwmhResult<Atom> {
        if let Some(atom) = self.atoms.borrow().get(name) {
            return Ok(*atom);
        }
        let atom = self.conn.intern_atom(false, name.as_bytes())?.reply()?.atom;
        trace!("atom: {} = {}", name, atom);
        self.atoms.borrow_mut().insert(name.to_owned(), atom);
        self.names.borrow_mut().insert(atom, name.to_owned());
        Ok(atom)
    }

    fn atom_name(&self, atom: Atom) -> EwmhResult<String> {
        if let Some(name) = self.names.borrow().get(&atom) {
            return Ok(name.clone());
        }
        let reply = self.conn.get_atom_name(atom)?.reply()?;
        let name = str::from_utf8(&reply.name)?.to_owned();
        self.names.borrow_mut().insert(atom, name.clone());
        self.atoms.borrow_mut().insert(name.clone(), atom);
        Ok(name)
    }

    fn get_property(&self, win: Window, property: Atom, type_: Atom) -> EwmhResult<GetPropertyReply> {
        Ok(self.conn.get_property(false, win, property, type_, 0, u32::MAX)?.reply()?)
    }

    fn send_client_message(&self, target: Window, type_: Atom, data: [u32; 5]) -> EwmhResult<()> {
        let msg = ClientMessageEvent::new(32, target, type_, data);
        let mask = EventMask::SUBSTRUCTURE_REDIRECT | EventMask::SUBSTRUCTURE_NOTIFY;
        self.conn.send_event(false, self.root, mask, msg)?;
        debug!("send_client_message: target: {}, type: {}", target, type_);
        Ok(())
    }

    fn replace_property_utf8(&self, win: Window, property: Atom, value: &str) -> EwmhResult<()> {
        let utf8 = self.atom("UTF8_STRING")?;
        self.conn.change_property8(PropMode::REPLACE, win, property, utf8, value.as_bytes())?;
        debug!("replace_property_utf8: win: {}, property: {}", win, property);
        Ok(())
    }

    fn replace_property_atoms(&self, win: Window, property: Atom, atoms: &[Atom]) -> EwmhResult<()> {
        self.conn.change_property32(PropMode::REPLACE, win, property, AtomEnum::ATOM, atoms)?;
        debug!("replace_property_atoms: win: {}, property: {}", win, property);
        Ok(())
    }

    fn flush(&self) -> EwmhResult<()> {
        Ok(self.conn.flush()?)
    }
}

#[cfg(test)]
pub(crate) mod mock {
    //! A scripted stand-in for the X server plus a minimally compliant window
    //! manager. Client messages are buffered until `flush`, at which point the
    //! ones a compliant window manager honors are applied to the property
    //! store so round trips can be observed.
    use super::*;

    pub(crate) struct SentMessage {
        pub(crate) target: Window,
        pub(crate) type_: Atom,
        pub(crate) data: [u32; 5],
    }

    struct StoredProperty {
        type_: Atom,
        format: u8,
        value: Vec<u8>,
    }

    pub(crate) struct MockSession {
        root: Window,
        atoms: RefCell<HashMap<String, Atom>>,
        names: RefCell<HashMap<Atom, String>>,
        next_atom: RefCell<Atom>,
        properties: RefCell<HashMap<(Window, Atom), StoredProperty>>,
        pending: RefCell<Vec<SentMessage>>,
        delivered: RefCell<Vec<SentMessage>>,
        property_writes: RefCell<Vec<(Window, Atom)>>,
    }

    impl MockSession {
        pub(crate) fn new(root: Window) -> Self {
            Self {
                root,
                atoms: RefCell::new(HashMap::new()),
                names: RefCell::new(HashMap::new()),
                // Clear of the predefined atom range so ids never collide
                // with AtomEnum constants used as property types.
                next_atom: RefCell::new(1000),
                properties: RefCell::new(HashMap::new()),
                pending: RefCell::new(Vec::new()),
                delivered: RefCell::new(Vec::new()),
                property_writes: RefCell::new(Vec::new()),
            }
        }

        fn intern(&self, name: &str) -> Atom {
            if let Some(atom) = self.atoms.borrow().get(name) {
                return *atom;
            }
            let mut next = self.next_atom.borrow_mut();
            let atom = *next;
            *next += 1;
            self.atoms.borrow_mut().insert(name.to_owned(), atom);
            self.names.borrow_mut().insert(atom, name.to_owned());
            atom
        }

        fn store(&self, win: Window, property: Atom, type_: Atom, format: u8, value: Vec<u8>) {
            self.properties.borrow_mut().insert((win, property), StoredProperty { type_, format, value });
        }

        /// Seed a 32bit format property as the window manager would have set it
        pub(crate) fn set_property_u32s(&self, win: Window, property: &str, type_: Atom, values: &[u32]) {
            let property = self.intern(property);
            let bytes = values.iter().flat_map(|v| v.to_ne_bytes()).collect();
            self.store(win, property, type_, 32, bytes);
        }

        /// Seed a UTF8 property as the window manager would have set it
        pub(crate) fn set_property_utf8(&self, win: Window, property: &str, value: &str) {
            let property = self.intern(property);
            let type_ = self.intern("UTF8_STRING");
            self.store(win, property, type_, 8, value.as_bytes().to_vec());
        }

        /// Seed an ATOM list property from atom names
        pub(crate) fn set_property_atom_names(&self, win: Window, property: &str, names: &[&str]) {
            let atoms: Vec<u32> = names.iter().map(|n| self.intern(n)).collect();
            self.set_property_u32s(win, property, AtomEnum::ATOM.into(), &atoms);
        }

        pub(crate) fn pending_messages(&self) -> usize {
            self.pending.borrow().len()
        }

        pub(crate) fn delivered_messages(&self) -> Vec<(Window, String, [u32; 5])> {
            self.delivered
                .borrow()
                .iter()
                .map(|m| (m.target, self.names.borrow()[&m.type_].clone(), m.data))
                .collect()
        }

        pub(crate) fn property_writes(&self) -> usize {
            self.property_writes.borrow().len()
        }

        // The window manager side of the mock: honor the requests a compliant
        // window manager applies by updating its property store.
        fn deliver(&self, msg: &SentMessage) {
            let name = self.names.borrow()[&msg.type_].clone();
            match name.as_str() {
                "_NET_WM_DESKTOP" => {
                    self.set_property_u32s(msg.target, "_NET_WM_DESKTOP", AtomEnum::CARDINAL.into(), &[msg.data[0]]);
                },
                "_NET_ACTIVE_WINDOW" => {
                    self.set_property_u32s(self.root, "_NET_ACTIVE_WINDOW", AtomEnum::WINDOW.into(), &[msg.target]);
                },
                "_NET_CURRENT_DESKTOP" => {
                    self.set_property_u32s(self.root, "_NET_CURRENT_DESKTOP", AtomEnum::CARDINAL.into(), &[msg.data[0]]);
                },
                "_NET_NUMBER_OF_DESKTOPS" => {
                    self.set_property_u32s(self.root, "_NET_NUMBER_OF_DESKTOPS", AtomEnum::CARDINAL.into(), &[msg.data[0]]);
                },
                _ => {},
            }
        }
    }

    impl XSession for MockSession {
        fn root(&self) -> Window {
            self.root
        }

        fn atom(&self, name: &str) -> EwmhResult<Atom> {
            Ok(self.intern(name))
        }

        fn atom_name(&self, atom: Atom) -> EwmhResult<String> {
            Ok(self.names.borrow()[&atom].clone())
        }

        fn get_property(&self, win: Window, property: Atom, _type: Atom) -> EwmhResult<GetPropertyReply> {
            let properties = self.properties.borrow();
            let reply = match properties.get(&(win, property)) {
                Some(prop) => {
                    let value_len = match prop.format {
                        32 => prop.value.len() as u32 / 4,
                        _ => prop.value.len() as u32,
                    };
                    GetPropertyReply {
                        format: prop.format,
                        sequence: 0,
                        length: (prop.value.len() as u32 + 3) / 4,
                        type_: prop.type_,
                        bytes_after: 0,
                        value_len,
                        value: prop.value.clone(),
                    }
                },
                // Property never set: the server replies with type NONE
                None => GetPropertyReply {
                    format: 0,
                    sequence: 0,
                    length: 0,
                    type_: x11rb::NONE,
                    bytes_after: 0,
                    value_len: 0,
                    value: vec![],
                },
            };
            Ok(reply)
        }

        fn send_client_message(&self, target: Window, type_: Atom, data: [u32; 5]) -> EwmhResult<()> {
            self.pending.borrow_mut().push(SentMessage { target, type_, data });
            Ok(())
        }

        fn replace_property_utf8(&self, win: Window, property: Atom, value: &str) -> EwmhResult<()> {
            self.property_writes.borrow_mut().push((win, property));
            let type_ = self.intern("UTF8_STRING");
            self.store(win, property, type_, 8, value.as_bytes().to_vec());
            Ok(())
        }

        fn replace_property_atoms(&self, win: Window, property: Atom, atoms: &[Atom]) -> EwmhResult<()> {
            self.property_writes.borrow_mut().push((win, property));
            let bytes = atoms.iter().flat_map(|a| a.to_ne_bytes()).collect();
            self.store(win, property, AtomEnum::ATOM.into(), 32, bytes);
            Ok(())
        }

        fn flush(&self) -> EwmhResult<()> {
            let pending: Vec<SentMessage> = self.pending.borrow_mut().drain(..).collect();
            for msg in pending {
                self.deliver(&msg);
                self.delivered.borrow_mut().push(msg);
            }
            Ok(())
        }
    }
}
