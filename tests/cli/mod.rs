
mod config;
mod errors;
mod mst;
mod path;
mod show;
