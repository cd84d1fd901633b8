pub mod media_controller;
