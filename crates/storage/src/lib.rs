#![warn(clippy::pedantic)]
#![allow(clippy::too_many_lines)]

pub mod local_storage;
pub mod rest;

#[cfg(test)]
mod tests {
    pub mod data;
}
