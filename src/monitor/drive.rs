use log::trace;
use sysinfo::Disks;

use crate::model::DriveStatus;

/// Mounted drives in enumeration order. A drive reporting zero total space
/// is a pseudo-filesystem or an unmounted volume; it is listed but not
/// ready.
pub fn collect(disks: &Disks) -> Vec<DriveStatus> {
    let drives: Vec<DriveStatus> = disks
        .iter()
        .map(|d| DriveStatus {
            name: d.name().to_string_lossy().into_owned(),
            mount_point: d.mount_point().to_string_lossy().into_owned(),
            is_ready: d.total_space() > 0,
            free_bytes: d.available_space(),
        })
        .collect();

    for drive in &drives {
        trace!(
            "drive {} at {}: ready={} free={}B",
            drive.name,
            drive.mount_point,
            drive.is_ready,
            drive.free_bytes
        );
    }

    drives
}
