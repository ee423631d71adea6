//! Reusable UI components shared by the gate's pages.

pub mod logout_button;
pub mod message_box;
