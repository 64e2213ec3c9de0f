pub mod form;
pub mod playground;
