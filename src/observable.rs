use std::fmt;

/// Handle returned by [`Observable::connect`], used to disconnect later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(u64);

type Listener<T> = Box<dyn FnMut(&T)>;

/// A value holder that notifies connected listeners whenever it changes.
///
/// Listeners run synchronously inside [`Observable::set`], in connection
/// order. Setting an equal value is not a change and notifies nobody.
pub struct Observable<T> {
    value: T,
    next_id: u64,
    listeners: Vec<(ConnectionId, Listener<T>)>,
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<T> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn connect(&mut self, listener: impl FnMut(&T) + 'static) -> ConnectionId {
        let id = ConnectionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was not connected.
    pub fn disconnect(&mut self, id: ConnectionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    fn notify(&mut self) {
        for (_, listener) in &mut self.listeners {
            listener(&self.value);
        }
    }
}

impl<T: PartialEq> Observable<T> {
    /// Store `value` and notify listeners if it differs from the current one.
    /// Returns whether a change happened.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        self.notify();
        true
    }
}
