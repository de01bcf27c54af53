mod common;

mod quality;
mod routing;
