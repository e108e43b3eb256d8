use crate::calculator::{availability_rating, speed_rating};
use crate::models::raid::RaidLevel;

/// Static reference text for one RAID level, shown in the info overlay
/// and by `--info`.
#[derive(Debug, Clone)]
pub struct RaidInfo {
    pub level:               RaidLevel,
    pub description:         &'static str,
    pub pros:                [&'static str; 3],
    pub cons:                [&'static str; 3],
    pub use_cases:           [&'static str; 3],
    pub speed_rating:        u8,
    pub availability_rating: u8,
}

pub fn info_for(level: RaidLevel) -> RaidInfo {
    let (description, pros, cons, use_cases) = match level {
        RaidLevel::Raid0 => (
            "RAID 0 (Striping) splits data across multiple drives for maximum performance, \
             but provides no redundancy. If any drive fails, all data is lost.",
            ["Maximum performance and speed",
             "Full storage capacity utilization",
             "Simple to implement"],
            ["No data redundancy or protection",
             "Single drive failure causes complete data loss",
             "Not suitable for critical data"],
            ["Video editing and temporary work files",
             "Gaming and applications needing fast I/O",
             "Cache or temporary storage systems"],
        ),
        RaidLevel::Raid1 => (
            "RAID 1 (Mirroring) creates exact copies of data on multiple drives. \
             Provides excellent redundancy but halves the usable capacity.",
            ["Complete data redundancy",
             "Fast read performance",
             "Simple recovery from drive failure"],
            ["50% storage capacity efficiency",
             "Higher cost per usable GB",
             "Write performance similar to single drive"],
            ["Boot drives and operating systems",
             "Critical databases and applications",
             "Small business servers"],
        ),
        RaidLevel::Raid5 => (
            "RAID 5 (Striping with Parity) distributes data and parity across all drives. \
             Provides good performance and redundancy with minimal capacity overhead.",
            ["Good balance of performance and redundancy",
             "Efficient use of storage capacity",
             "Can survive one drive failure"],
            ["Slower write performance due to parity calculation",
             "Rebuild can be slow with large drives",
             "Risk of data loss during rebuild if another drive fails"],
            ["File servers and network attached storage",
             "General purpose server storage",
             "Backup and archive systems"],
        ),
        RaidLevel::Raid6 => (
            "RAID 6 (Striping with Dual Parity) is similar to RAID 5 but with two parity sets. \
             Can survive two simultaneous drive failures.",
            ["Excellent redundancy (tolerates 2 drive failures)",
             "Good protection during rebuild operations",
             "Suitable for large capacity drives"],
            ["Higher capacity overhead than RAID 5",
             "Slower write performance than RAID 5",
             "More complex implementation"],
            ["Large enterprise storage systems",
             "Critical data archives",
             "Systems with long rebuild times"],
        ),
        RaidLevel::Raid10 => (
            "RAID 10 (Stripe of Mirrors) combines mirroring and striping. Provides excellent \
             performance and redundancy but requires an even number of drives.",
            ["Excellent performance for reads and writes",
             "High redundancy with fast rebuild",
             "Can survive multiple drive failures (if in different mirrors)"],
            ["50% storage capacity efficiency",
             "Requires even number of drives (minimum 4)",
             "Higher cost per usable GB"],
            ["High-performance databases",
             "Virtualization and server clusters",
             "Critical applications needing both speed and redundancy"],
        ),
        RaidLevel::Jbod => (
            "JBOD (Just a Bunch Of Disks) combines multiple drives as one large volume \
             without any RAID features. Each drive operates independently.",
            ["Simple and flexible",
             "Full utilization of all drive capacity",
             "No performance overhead from RAID calculations"],
            ["No redundancy or data protection",
             "Drive failure affects only data on that drive",
             "No performance benefits of striping"],
            ["Large single-volume storage needs",
             "Archiving and backup systems",
             "Media servers and libraries"],
        ),
    };

    RaidInfo {
        level,
        description,
        pros,
        cons,
        use_cases,
        speed_rating:        speed_rating(level),
        availability_rating: availability_rating(level),
    }
}
