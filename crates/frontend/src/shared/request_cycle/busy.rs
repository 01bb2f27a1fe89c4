/// Per-controller busy flag. The trigger is interactive iff `is_busy()` is false.
pub trait BusyControl {
    fn is_busy(&self) -> bool;
    fn set_busy(&self, busy: bool);
}

/// Marks its owner busy on creation and idle on drop.
///
/// Held across the request's await point, so early returns and every settled
/// path restore the idle state exactly once.
#[must_use = "dropping the guard immediately marks the owner idle again"]
pub struct BusyGuard<'a, B: BusyControl + ?Sized> {
    owner: &'a B,
}

impl<'a, B: BusyControl + ?Sized> BusyGuard<'a, B> {
    pub fn enter(owner: &'a B) -> Self {
        owner.set_busy(true);
        Self { owner }
    }
}

impl<B: BusyControl + ?Sized> Drop for BusyGuard<'_, B> {
    fn drop(&mut self) {
        self.owner.set_busy(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        transitions: RefCell<Vec<bool>>,
    }

    impl BusyControl for Recorder {
        fn is_busy(&self) -> bool {
            self.transitions.borrow().last().copied().unwrap_or(false)
        }

        fn set_busy(&self, busy: bool) {
            self.transitions.borrow_mut().push(busy);
        }
    }

    #[test]
    fn test_guard_releases_once() {
        let recorder = Recorder::default();
        {
            let _guard = BusyGuard::enter(&recorder);
            assert!(recorder.is_busy());
        }
        assert_eq!(*recorder.transitions.borrow(), vec![true, false]);
    }

    #[test]
    fn test_guard_releases_on_early_return() {
        fn send(owner: &Recorder, reply: Result<u16, &'static str>) -> Result<u16, &'static str> {
            let _guard = BusyGuard::enter(owner);
            let status = reply?;
            Ok(status)
        }

        let recorder = Recorder::default();
        assert!(send(&recorder, Err("offline")).is_err());
        assert!(!recorder.is_busy());
        assert_eq!(*recorder.transitions.borrow(), vec![true, false]);
    }
}
