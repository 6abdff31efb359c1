mod error;
mod nav;
mod reveal;
mod session;
mod transition;
mod view;
