mod common;
mod profile;
mod routing;
