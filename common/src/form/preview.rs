use crate::model::photo::Photo;

/// Produces displayable handles for accepted photos and releases them.
///
/// `release` takes the handle by value, so once released a handle can no
/// longer be reached through the store. The store calls `release` exactly once
/// per handle it created: when a new photo supersedes it, on reset, and on drop.
pub trait PreviewProvider {
    type Handle;

    fn create(&mut self, photo: &Photo) -> Self::Handle;

    fn release(&mut self, handle: Self::Handle);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::collections::BTreeSet;
    use std::rc::Rc;

    /// Bookkeeping shared between a `CountingPreviews` and the test holding it.
    #[derive(Debug, Default)]
    pub struct PreviewLedger {
        pub next_id: u32,
        pub live: BTreeSet<u32>,
        pub released: Vec<u32>,
    }

    /// Provider handing out numbered handles and recording every release.
    #[derive(Debug, Default, Clone)]
    pub struct CountingPreviews {
        pub ledger: Rc<RefCell<PreviewLedger>>,
    }

    impl PreviewProvider for CountingPreviews {
        type Handle = u32;

        fn create(&mut self, _photo: &Photo) -> u32 {
            let mut ledger = self.ledger.borrow_mut();
            ledger.next_id += 1;
            let id = ledger.next_id;
            ledger.live.insert(id);
            id
        }

        fn release(&mut self, handle: u32) {
            let mut ledger = self.ledger.borrow_mut();
            assert!(ledger.live.remove(&handle), "handle {handle} released twice");
            ledger.released.push(handle);
        }
    }
}
