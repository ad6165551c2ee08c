//! Static export configuration: field rename tables per source shape,
//! destination feature-class names, and the override rules per shape.
//! Pure data, no behavior beyond assembling model types.

pub mod rules;
pub mod tables;

pub use rules::{layer_exports, OTHER_SENTINELS};
pub use tables::{
    BAUTEN_TO_COM_DOKU_PUNKT, ENDVERBRAUCHER_TO_COM_DOKU_PUNKT, FC_KABEL, FC_PUNKT,
    FC_REL_KABEL_ROHR, FC_ROHR, LEERROHRE_TO_COM_DOKU_ROHR, MESSPUNKT_TO_COM_DOKU_PUNKT,
    NETZTECHNIK_TO_COM_DOKU_PUNKT, PUNKT_TO_COM_DOKU_PUNKT, ROHRMUFFE_TO_COM_DOKU_PUNKT,
    TEMPLATE_GDB_NAME, VERBINDUNGEN_TO_COM_DOKU_KABEL,
};
