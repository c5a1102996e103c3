#![cfg(test)]
mod planning;
mod properties;
