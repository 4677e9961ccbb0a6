use crate::{Disk, FitLabel, Partition, PartitionType};

use FitLabel::{BestFit, FirstFit, WorstFit};
use PartitionType::{Extended, Primary};

/// The fixed catalog served by the API. Partition sizes are not required to
/// fit inside their disk.
pub fn seed_disks() -> Vec<Disk> {
    vec![
        Disk::new(
            'A',
            10,
            vec![
                Partition::new("A1", 1000, Primary, FirstFit),
                Partition::new("A2", 1500, Primary, WorstFit),
                Partition::new("A3", 1200, Primary, BestFit),
                Partition::new("A4", 800, Primary, FirstFit),
            ],
        ),
        Disk::new(
            'B',
            15,
            vec![
                Partition::new("B1", 2000, Primary, BestFit),
                Partition::new("B2", 1000, Primary, FirstFit),
                Partition::new("B3", 500, Primary, WorstFit),
                Partition::new("B4", 2500, Primary, FirstFit),
            ],
        ),
        Disk::new(
            'C',
            20,
            vec![
                Partition::new("C1", 3000, Primary, FirstFit),
                Partition::new("C2", 1500, Primary, WorstFit),
                Partition::new("CEXT", 4000, Extended, BestFit),
            ],
        ),
        Disk::new(
            'D',
            25,
            vec![
                Partition::new("D1", 3500, Primary, BestFit),
                Partition::new("D2", 2000, Primary, WorstFit),
                Partition::new("DEXT", 5000, Extended, FirstFit),
            ],
        ),
        Disk::new(
            'E',
            20,
            vec![
                Partition::new("E1", 3000, Primary, FirstFit),
                Partition::new("EEXT", 1500, Extended, WorstFit),
            ],
        ),
        Disk::new(
            'F',
            25,
            vec![
                Partition::new("F1", 3000, Primary, FirstFit),
                Partition::new("F2", 1500, Primary, WorstFit),
            ],
        ),
    ]
}
