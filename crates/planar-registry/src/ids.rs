use planar_types::ObjectId;

/// Generates identifiers for objects created without an explicit name.
///
/// Ids run `#001`, `#002`, … and widen past `#999`.
#[derive(Clone, Debug, Default)]
pub struct IdAllocator {
    issued: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next id.
    pub fn next_id(&mut self) -> ObjectId {
        self.issued += 1;
        ObjectId::from_name(&format!("#{:03}", self.issued))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.next_id().name(), "#001");
        assert_eq!(ids.next_id().name(), "#002");
        assert_eq!(ids.next_id().name(), "#003");
    }

    #[test]
    fn ids_widen_past_three_digits() {
        let mut ids = IdAllocator { issued: 999 };
        assert_eq!(ids.next_id().name(), "#1000");
    }
}
