//! Field rename tables between source layers and geodatabase feature
//! classes. Order matters: it drives destination schema derivation.

/// PUNKT → COM_DOKU_PUNKT
pub const PUNKT_TO_COM_DOKU_PUNKT: &[(&str, &str)] = &[
    ("id", "ID"),
    ("ART", "ART"),
    ("BA_BEZ_COM", "BA_BEZ_COM"),
    ("BAUJAHR", "BAUJAHR"),
    ("EIGENTUM", "EIGENTUM"),
    ("ZV", "ZWECKVERBAND"),
    ("FOERDERUNG", "FOERDERUNG"),
    ("FOERD_VERS", "GIS_NB_VERSION"),
    ("QUELLE", "ERSTELLER"),
    ("LQ", "LAGEQUALITAET"),
    ("BEMERKUNG", "BEMERKUNG"),
    ("GEBIET_ID", "GEBIET_ID"),
];

/// ROHRMUFFE → COM_DOKU_PUNKT
pub const ROHRMUFFE_TO_COM_DOKU_PUNKT: &[(&str, &str)] = &[
    ("id", "ID"),
    ("ART", "ART"),
    ("BAUJAHR", "BAUJAHR"),
    ("BEMERKUNG", "BEMERKUNG"),
    ("KLASSE", "KLASSE"),
    ("GEBIET_ID", "GEBIET_ID"),
];

/// MESSPUNKT → COM_DOKU_PUNKT
pub const MESSPUNKT_TO_COM_DOKU_PUNKT: &[(&str, &str)] = &[
    ("id", "ID"),
    ("ART", "ART"),
    ("BEMERKUNG", "BEMERKUNG"),
    ("VERL_TIEF", "VERLEGETIEFE"),
    ("DATEIPFAD", "DATEIPFAD"),
    ("KLASSE", "KLASSE"),
    ("DATUM_EINSPIELUNG", "DATUM_EINSPIELUNG"),
    ("GEBIET_ID", "GEBIET_ID"),
];

/// BAUTEN → COM_DOKU_PUNKT. ART additionally falls back to ART_SONST.
pub const BAUTEN_TO_COM_DOKU_PUNKT: &[(&str, &str)] = &[
    ("id", "ID"),
    ("ART", "ART"),
    ("BEZEICHNER", "BEZEICHNUNG"),
    ("BA_BEZ_COM", "BA_BEZ_COM"),
    ("BAUJAHR", "BAUJAHR"),
    ("EIGENTUM", "EIGENTUM"),
    ("ZWECKVERBAND", "ZWECKVERBAND"),
    ("FOERDERUNG", "FOERDERUNG"),
    ("FOERD_VERS", "GIS_NB_VERSION"),
    ("QUELLE", "ERSTELLER"),
    ("LAGEQUALITAET", "LAGEQUALITAET"),
    ("BEMERKUNG", "BEMERKUNG"),
    ("KLASSE", "KLASSE"),
    ("X_WGS", "X_COORD"),
    ("Y_WGS", "Y_COORD"),
    ("GEBIET_ID", "GEBIET_ID"),
];

/// NETZTECHNIK → COM_DOKU_PUNKT. ART additionally falls back to ART_SONST.
pub const NETZTECHNIK_TO_COM_DOKU_PUNKT: &[(&str, &str)] = &[
    ("id", "ID"),
    ("ART", "ART"),
    ("BEZEICHNER", "BEZEICHNUNG"),
    ("BA_BEZ_COM", "BA_BEZ_COM"),
    ("BAUJAHR", "BAUJAHR"),
    ("EIGENTUM", "EIGENTUM"),
    ("ZWECKVERBAND", "ZWECKVERBAND"),
    ("FOERDERUNG", "FOERDERUNG"),
    ("FOERD_VERS", "GIS_NB_VERSION"),
    ("QUELLE", "ERSTELLER"),
    ("LAGEQUALITAET", "LAGEQUALITAET"),
    ("BEMERKUNG", "BEMERKUNG"),
    ("KLASSE", "KLASSE"),
    ("GEBIET_ID", "GEBIET_ID"),
];

/// ENDVERBRAUCHER → COM_DOKU_PUNKT
pub const ENDVERBRAUCHER_TO_COM_DOKU_PUNKT: &[(&str, &str)] = &[
    ("id", "ID"),
    ("KUNDENTYP", "KUNDENTYP"),
    ("KLASSE", "KLASSE"),
    ("GEBIET_ID", "GEBIET_ID"),
];

/// Leerrohre → COM_DOKU_ROHR. LR_FARBE is derived from TYP:
/// Schutzrohr/Rohrverband use M_FARB, Einzelrohr uses ER_FARB.
pub const LEERROHRE_TO_COM_DOKU_ROHR: &[(&str, &str)] = &[
    ("id", "ID"),
    ("TYP", "TYP"),
    ("LR_RESERV", "LR_ANZ_FREI"),
    ("EIGENTUM", "EIGENTUM"),
    // LR_FARBE is a derived field, not part of the rename table.
    ("LR_HERST", "LR_HERST"),
    ("LR_VERLMET", "LR_VERL_METHODE"),
    ("ID_EINZUG", "ID_EINZUG"),
    ("LABEL", "LABEL"),
    ("BAUJAHR", "BAUJAHR"),
    ("ZV", "ZWECKVERBAND"),
    ("QUELLE", "ERSTELLER"),
    ("FOERDERUNG", "FOERDERUNG"),
    ("FOERD_VERS", "GIS_NB_VERSION"),
    ("LQ", "LAGEQUALITAET"),
    ("BEMERKUNG", "BEMERKUNG"),
    ("GEBIET_ID", "GEBIET_ID"),
    ("ROHR_ID", "ROHR_ID"),
];

/// Verbindungen → COM_DOKU_KABEL. LR_FARBE derives from ER_FARB, and ART
/// falls back to V_A_SONST.
pub const VERBINDUNGEN_TO_COM_DOKU_KABEL: &[(&str, &str)] = &[
    ("id", "ID"),
    ("VERB_ART", "ART"),
    ("LAE_KABEL", "LAENGE"),
    ("TYP", "TYP"),
    // LR_FARBE is a derived field, not part of the rename table.
    ("ID_EINZUG", "ID_EINZUG"),
    ("LABEL", "LABEL"),
    ("BAUJAHR", "BAUJAHR"),
    ("EIGENTUM", "EIGENTUM"),
    ("ZWECKVERBAND", "ZWECKVERBAND"),
    ("FOERDERUNG", "FOERDERUNG"),
    ("FOERD_VERS", "GIS_NB_VERSION"),
    ("QUELLE", "ERSTELLER"),
    ("LQ", "LAGEQUALITAET"),
    ("BEMERKUNG", "BEMERKUNG"),
    ("GEBIET_ID", "GEBIET_ID"),
    ("KABEL_ID", "KABEL_ID"),
];

/// Name of the packaged template geodatabase.
pub const TEMPLATE_GDB_NAME: &str = "GIS_Nebenstimungen_501_geodatabase.gdb";

pub const FC_PUNKT: &str = "COM_DOKU_PUNKT";
pub const FC_KABEL: &str = "COM_DOKU_KABEL";
pub const FC_ROHR: &str = "COM_DOKU_ROHR";
/// Present in the template; no source layer currently maps into it.
pub const FC_REL_KABEL_ROHR: &str = "REL_KABEL_ROHR";
