//! Default catalog contents.

use crate::catalog::Catalog;

/// The default ten-book catalog, keyed `"1"` through `"10"`.
pub fn default_catalog() -> Catalog {
    Catalog::new([
        ("1", "Chinua Achebe", "Things Fall Apart"),
        ("2", "Hans Christian Andersen", "Fairy tales"),
        ("3", "Dante Alighieri", "The Divine Comedy"),
        ("4", "Unknown", "The Epic Of Gilgamesh"),
        ("5", "Unknown", "The Book Of Job"),
        ("6", "Unknown", "One Thousand and One Nights"),
        ("7", "Unknown", "Njal's Saga"),
        ("8", "Jane Austen", "Pride and Prejudice"),
        ("9", "Honore de Balzac", "Le Pere Goriot"),
        ("10", "Samuel Beckett", "Molloy, Malone Dies, The Unnamable, the trilogy"),
    ])
}
