// [libs/domain/models/src/enums.rs]
/*!
 * =================================================================
 * APARATO: PROTOCOL ENUMERATIONS (V3.0 - CORPUS MASTER)
 * CLASIFICACIÓN: DOMAIN MODELS (ESTRATO L2)
 * RESPONSABILIDAD: CATÁLOGO CERRADO DE BUSES Y CATEGORÍAS DE DISPOSITIVO
 *
 * # Invariante de almacenamiento:
 * El Ledger persiste ambos catálogos como TEXT con el literal exacto del
 * protocolo upstream ('pci', 'dmi', 'PROCESSOR', 'BOARD'...). Las
 * conversiones as_str/from_str son la única frontera de texto permitida.
 * =================================================================
 */

use serde::{Deserialize, Serialize};

/// Bus físico o lógico sobre el que el dispositivo fue enumerado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(clippy::upper_case_acronyms)]
pub enum BusType {
    Apex,
    AtaDevice,
    Backlight,
    Block,
    Bluetooth,
    Cciss,
    Ccw,
    Dmi,
    Drm,
    Firewire,
    Gameport,
    Hid,
    Hidraw,
    I2c,
    Ide,
    Ieee80211,
    Infiniband,
    Input,
    MemstickHost,
    Misc,
    Mmc,
    MmcHost,
    MmcRpmb,
    Mtd,
    Nd,
    Net,
    Nvme,
    Pci,
    Platform,
    Pnp,
    PowerSupply,
    Ppdev,
    Rc,
    Rfkill,
    Scsi,
    ScsiHost,
    Sdio,
    Serial,
    Serio,
    Sound,
    Tty,
    Usb,
    UsbDevice,
    Vchiq,
    Video4linux,
    Virtio,
    Virtual,
}

impl BusType {
    /// Catálogo completo para la resolución inversa texto -> variante.
    pub const ALL: &'static [BusType] = &[
        BusType::Apex,
        BusType::AtaDevice,
        BusType::Backlight,
        BusType::Block,
        BusType::Bluetooth,
        BusType::Cciss,
        BusType::Ccw,
        BusType::Dmi,
        BusType::Drm,
        BusType::Firewire,
        BusType::Gameport,
        BusType::Hid,
        BusType::Hidraw,
        BusType::I2c,
        BusType::Ide,
        BusType::Ieee80211,
        BusType::Infiniband,
        BusType::Input,
        BusType::MemstickHost,
        BusType::Misc,
        BusType::Mmc,
        BusType::MmcHost,
        BusType::MmcRpmb,
        BusType::Mtd,
        BusType::Nd,
        BusType::Net,
        BusType::Nvme,
        BusType::Pci,
        BusType::Platform,
        BusType::Pnp,
        BusType::PowerSupply,
        BusType::Ppdev,
        BusType::Rc,
        BusType::Rfkill,
        BusType::Scsi,
        BusType::ScsiHost,
        BusType::Sdio,
        BusType::Serial,
        BusType::Serio,
        BusType::Sound,
        BusType::Tty,
        BusType::Usb,
        BusType::UsbDevice,
        BusType::Vchiq,
        BusType::Video4linux,
        BusType::Virtio,
        BusType::Virtual,
    ];

    /// Literal del protocolo, idéntico al valor persistido en el Ledger.
    pub fn as_str(&self) -> &'static str {
        match self {
            BusType::Apex => "apex",
            BusType::AtaDevice => "ata_device",
            BusType::Backlight => "backlight",
            BusType::Block => "block",
            BusType::Bluetooth => "bluetooth",
            BusType::Cciss => "cciss",
            BusType::Ccw => "ccw",
            BusType::Dmi => "dmi",
            BusType::Drm => "drm",
            BusType::Firewire => "firewire",
            BusType::Gameport => "gameport",
            BusType::Hid => "hid",
            BusType::Hidraw => "hidraw",
            BusType::I2c => "i2c",
            BusType::Ide => "ide",
            BusType::Ieee80211 => "ieee80211",
            BusType::Infiniband => "infiniband",
            BusType::Input => "input",
            BusType::MemstickHost => "memstick_host",
            BusType::Misc => "misc",
            BusType::Mmc => "mmc",
            BusType::MmcHost => "mmc_host",
            BusType::MmcRpmb => "mmc_rpmb",
            BusType::Mtd => "mtd",
            BusType::Nd => "nd",
            BusType::Net => "net",
            BusType::Nvme => "nvme",
            BusType::Pci => "pci",
            BusType::Platform => "platform",
            BusType::Pnp => "pnp",
            BusType::PowerSupply => "power_supply",
            BusType::Ppdev => "ppdev",
            BusType::Rc => "rc",
            BusType::Rfkill => "rfkill",
            BusType::Scsi => "scsi",
            BusType::ScsiHost => "scsi_host",
            BusType::Sdio => "sdio",
            BusType::Serial => "serial",
            BusType::Serio => "serio",
            BusType::Sound => "sound",
            BusType::Tty => "tty",
            BusType::Usb => "usb",
            BusType::UsbDevice => "usb_device",
            BusType::Vchiq => "vchiq",
            BusType::Video4linux => "video4linux",
            BusType::Virtio => "virtio",
            BusType::Virtual => "virtual",
        }
    }
}

impl std::str::FromStr for BusType {
    type Err = String;

    fn from_str(raw_bus_literal: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|candidate| candidate.as_str() == raw_bus_literal)
            .copied()
            .ok_or_else(|| format!("UNKNOWN_BUS_LITERAL: {raw_bus_literal}"))
    }
}

impl std::fmt::Display for BusType {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Clasificación funcional del dispositivo dentro de un reporte certificado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceCategory {
    Accelerometer,
    Audio,
    Bios,
    Bluetooth,
    BmcNetwork,
    Board,
    Canbus,
    Capture,
    Cardreader,
    Cdrom,
    Chassis,
    Disk,
    Efi,
    Firewire,
    Floppy,
    Hidraw,
    Ide,
    Infiniband,
    Keyboard,
    Mmal,
    Modem,
    Mouse,
    Network,
    Other,
    Printer,
    Processor,
    Raid,
    Scsi,
    Socket,
    Socketcan,
    System,
    Touch,
    Touchpad,
    Touchscreen,
    Tpu,
    Usb,
    Video,
    Watchdog,
    Wireless,
    Wwan,
}

impl DeviceCategory {
    /// Catálogo completo para la resolución inversa texto -> variante.
    pub const ALL: &'static [DeviceCategory] = &[
        DeviceCategory::Accelerometer,
        DeviceCategory::Audio,
        DeviceCategory::Bios,
        DeviceCategory::Bluetooth,
        DeviceCategory::BmcNetwork,
        DeviceCategory::Board,
        DeviceCategory::Canbus,
        DeviceCategory::Capture,
        DeviceCategory::Cardreader,
        DeviceCategory::Cdrom,
        DeviceCategory::Chassis,
        DeviceCategory::Disk,
        DeviceCategory::Efi,
        DeviceCategory::Firewire,
        DeviceCategory::Floppy,
        DeviceCategory::Hidraw,
        DeviceCategory::Ide,
        DeviceCategory::Infiniband,
        DeviceCategory::Keyboard,
        DeviceCategory::Mmal,
        DeviceCategory::Modem,
        DeviceCategory::Mouse,
        DeviceCategory::Network,
        DeviceCategory::Other,
        DeviceCategory::Printer,
        DeviceCategory::Processor,
        DeviceCategory::Raid,
        DeviceCategory::Scsi,
        DeviceCategory::Socket,
        DeviceCategory::Socketcan,
        DeviceCategory::System,
        DeviceCategory::Touch,
        DeviceCategory::Touchpad,
        DeviceCategory::Touchscreen,
        DeviceCategory::Tpu,
        DeviceCategory::Usb,
        DeviceCategory::Video,
        DeviceCategory::Watchdog,
        DeviceCategory::Wireless,
        DeviceCategory::Wwan,
    ];

    /// Literal del protocolo, idéntico al valor persistido en el Ledger.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceCategory::Accelerometer => "ACCELEROMETER",
            DeviceCategory::Audio => "AUDIO",
            DeviceCategory::Bios => "BIOS",
            DeviceCategory::Bluetooth => "BLUETOOTH",
            DeviceCategory::BmcNetwork => "BMC_NETWORK",
            DeviceCategory::Board => "BOARD",
            DeviceCategory::Canbus => "CANBUS",
            DeviceCategory::Capture => "CAPTURE",
            DeviceCategory::Cardreader => "CARDREADER",
            DeviceCategory::Cdrom => "CDROM",
            DeviceCategory::Chassis => "CHASSIS",
            DeviceCategory::Disk => "DISK",
            DeviceCategory::Efi => "EFI",
            DeviceCategory::Firewire => "FIREWIRE",
            DeviceCategory::Floppy => "FLOPPY",
            DeviceCategory::Hidraw => "HIDRAW",
            DeviceCategory::Ide => "IDE",
            DeviceCategory::Infiniband => "INFINIBAND",
            DeviceCategory::Keyboard => "KEYBOARD",
            DeviceCategory::Mmal => "MMAL",
            DeviceCategory::Modem => "MODEM",
            DeviceCategory::Mouse => "MOUSE",
            DeviceCategory::Network => "NETWORK",
            DeviceCategory::Other => "OTHER",
            DeviceCategory::Printer => "PRINTER",
            DeviceCategory::Processor => "PROCESSOR",
            DeviceCategory::Raid => "RAID",
            DeviceCategory::Scsi => "SCSI",
            DeviceCategory::Socket => "SOCKET",
            DeviceCategory::Socketcan => "SOCKETCAN",
            DeviceCategory::System => "SYSTEM",
            DeviceCategory::Touch => "TOUCH",
            DeviceCategory::Touchpad => "TOUCHPAD",
            DeviceCategory::Touchscreen => "TOUCHSCREEN",
            DeviceCategory::Tpu => "TPU",
            DeviceCategory::Usb => "USB",
            DeviceCategory::Video => "VIDEO",
            DeviceCategory::Watchdog => "WATCHDOG",
            DeviceCategory::Wireless => "WIRELESS",
            DeviceCategory::Wwan => "WWAN",
        }
    }
}

impl std::str::FromStr for DeviceCategory {
    type Err = String;

    fn from_str(raw_category_literal: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|candidate| candidate.as_str() == raw_category_literal)
            .copied()
            .ok_or_else(|| format!("UNKNOWN_CATEGORY_LITERAL: {raw_category_literal}"))
    }
}

impl std::fmt::Display for DeviceCategory {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}
// FIN DEL ARCHIVO [libs/domain/models/src/enums.rs]
