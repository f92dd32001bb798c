//! Standard agent property and item names

/// Properties exposed by the mount and imager agents
pub mod agent_properties {
    // Mount agent
    pub const MOUNT_EQUATORIAL_COORDINATES: &str = "MOUNT_EQUATORIAL_COORDINATES";
    pub const MOUNT_HORIZONTAL_COORDINATES: &str = "MOUNT_HORIZONTAL_COORDINATES";
    pub const MOUNT_TRACKING: &str = "MOUNT_TRACKING";
    pub const MOUNT_PARK: &str = "MOUNT_PARK";

    // Imager agent
    pub const CCD_EXPOSURE: &str = "CCD_EXPOSURE";
    pub const CCD_UPLOAD_MODE: &str = "CCD_UPLOAD_MODE";
    pub const CCD_FRAME_TYPE: &str = "CCD_FRAME_TYPE";
    pub const CCD_IMAGE_FORMAT: &str = "CCD_IMAGE_FORMAT";
    pub const CCD_LOCAL_MODE: &str = "CCD_LOCAL_MODE";
    pub const CCD_SET_FITS_HEADER: &str = "CCD_SET_FITS_HEADER";
    pub const CCD_IMAGE_FILE: &str = "CCD_IMAGE_FILE";
    pub const CCD_LENS_FOV: &str = "CCD_LENS_FOV";
}

/// Item names within the standard properties
pub mod item_names {
    // Coordinates
    pub const RA: &str = "RA";
    pub const DEC: &str = "DEC";
    pub const ALT: &str = "ALT";
    pub const AZ: &str = "AZ";

    // Mount switches
    pub const ON: &str = "ON";
    pub const OFF: &str = "OFF";
    pub const PARKED: &str = "PARKED";
    pub const UNPARKED: &str = "UNPARKED";

    // Imager
    pub const EXPOSURE: &str = "EXPOSURE";
    pub const CLIENT: &str = "CLIENT";
    pub const LOCAL: &str = "LOCAL";
    pub const BOTH: &str = "BOTH";
    pub const LIGHT: &str = "LIGHT";
    pub const FITS: &str = "FITS";
    pub const DIR: &str = "DIR";
    pub const PREFIX: &str = "PREFIX";
    pub const KEYWORD: &str = "KEYWORD";
    pub const VALUE: &str = "VALUE";
    pub const FILE: &str = "FILE";
    pub const FOV_WIDTH: &str = "FOV_WIDTH";
    pub const FOV_HEIGHT: &str = "FOV_HEIGHT";
}
