use eframe::egui;

use crate::GuiApp;

mod controls;
mod data;
mod panels;
