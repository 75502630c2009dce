use crate::models::RawRecord;

/// New-user counts collected so far. The first day predates tracking.
pub static RAW_RECORDS: &[RawRecord] = &[
    RawRecord::new(167473, "1.4.2025", None),
    RawRecord::new(185155, "19.4.2025", Some(17682)),
    RawRecord::new(191817, "25.4.2025", Some(6662)),
    RawRecord::new(205575, "6.5.2025", Some(13758)),
    RawRecord::new(214384, "12.5.2025", Some(8809)),
    RawRecord::new(222871, "17.5.2025", Some(8487)),
    RawRecord::new(225096, "18.5.2025", Some(2225)),
    RawRecord::new(226989, "19.5.2025", Some(1893)),
    RawRecord::new(228560, "20.5.2025", Some(1571)),
    RawRecord::new(230020, "21.5.2025", Some(1460)),
    RawRecord::new(246193, "29.5.2025", Some(16173)),
    RawRecord::new(252049, "1.6.2025", Some(5856)),
    RawRecord::new(261010, "5.6.2025", Some(8961)),
    RawRecord::new(273450, "10.6.2025", Some(12440)),
    RawRecord::new(279150, "12.6.2025", Some(5700)),
];
