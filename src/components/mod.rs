//! Page components: the particle background and the header controls around it.

pub mod nav_menu;
pub mod particle_field;
pub mod theme_toggle;
