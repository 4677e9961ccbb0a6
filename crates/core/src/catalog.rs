use crate::{seed_disks, Disk, Partition};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("disk {letter:?} not found")]
    DiskNotFound { letter: String },
}

/// Read-only view over a disk list. Built once and shared; lookups are linear
/// scans in insertion order.
#[derive(Debug, Clone)]
pub struct DiskCatalog {
    disks: Vec<Disk>,
}

impl DiskCatalog {
    pub fn new(disks: Vec<Disk>) -> Self {
        Self { disks }
    }

    pub fn seeded() -> Self {
        Self::new(seed_disks())
    }

    pub fn list_disks(&self) -> &[Disk] {
        &self.disks
    }

    /// Case-sensitive match on the disk letter. Anything other than a single
    /// character never matches.
    pub fn find_disk(&self, letter: &str) -> Result<&Disk, CatalogError> {
        let mut chars = letter.chars();
        let wanted = match (chars.next(), chars.next()) {
            (Some(ch), None) => Some(ch),
            _ => None,
        };
        wanted
            .and_then(|ch| self.disks.iter().find(|disk| disk.letter == ch))
            .ok_or_else(|| {
                tracing::debug!(letter, "disk lookup missed");
                CatalogError::DiskNotFound {
                    letter: letter.to_string(),
                }
            })
    }

    pub fn list_partitions(&self, letter: &str) -> Result<&[Partition], CatalogError> {
        self.find_disk(letter).map(|disk| disk.partitions.as_slice())
    }

    pub fn len(&self) -> usize {
        self.disks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }
}

impl Default for DiskCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FitLabel, PartitionType};

    #[test]
    fn lists_six_disks_in_order() {
        let catalog = DiskCatalog::seeded();
        let letters: String = catalog.list_disks().iter().map(|disk| disk.letter).collect();
        assert_eq!(letters, "ABCDEF");
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.list_disks(), DiskCatalog::seeded().list_disks());
    }

    #[test]
    fn every_seeded_disk_has_partitions() {
        let catalog = DiskCatalog::seeded();
        for letter in ["A", "B", "C", "D", "E", "F"] {
            let partitions = catalog.list_partitions(letter).unwrap();
            assert!(!partitions.is_empty(), "disk {letter}");
        }
    }

    #[test]
    fn returns_partitions_of_c() {
        let catalog = DiskCatalog::seeded();
        let partitions = catalog.list_partitions("C").unwrap();
        let names: Vec<&str> = partitions.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["C1", "C2", "CEXT"]);
        assert_eq!(partitions[2].kind, PartitionType::Extended);
        assert_eq!(partitions[2].fit, FitLabel::BestFit);
    }

    #[test]
    fn unknown_letter_is_not_found() {
        let catalog = DiskCatalog::seeded();
        assert_eq!(
            catalog.list_partitions("Z"),
            Err(CatalogError::DiskNotFound {
                letter: "Z".to_string()
            })
        );
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let catalog = DiskCatalog::seeded();
        assert!(catalog.list_partitions("c").is_err());
    }

    #[test]
    fn rejects_empty_and_long_input() {
        let catalog = DiskCatalog::seeded();
        assert!(catalog.find_disk("").is_err());
        assert!(catalog.find_disk("CC").is_err());
    }

    #[test]
    fn empty_partition_list_is_returned() {
        let catalog = DiskCatalog::new(vec![Disk::new('Q', 1, Vec::new())]);
        assert_eq!(catalog.list_partitions("Q").unwrap(), &[] as &[Partition]);
    }

    #[test]
    fn first_match_wins() {
        let catalog = DiskCatalog::new(vec![
            Disk::new('Q', 1, Vec::new()),
            Disk::new('Q', 2, Vec::new()),
        ]);
        assert_eq!(catalog.find_disk("Q").unwrap().size_mb, 1);
    }
}
