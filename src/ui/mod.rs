//! UI modules for the contact window

pub mod components;
mod contact_form;
pub mod theme;

pub use contact_form::render_contact_form;
