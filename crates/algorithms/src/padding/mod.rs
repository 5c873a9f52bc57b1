//! Block padding schemes

pub mod pkcs7;
