use super::domain::FoodOption;

/// Multi-select state over [`FoodOption`]. Keeps selection order for display.
///
/// Items are typed, so nothing outside the catalogue can be toggled; free text
/// has to go through `FoodOption::from_str`, which rejects unknown names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodSelectionSet {
    selected: Vec<FoodOption>,
}

impl FoodSelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the item when absent, remove it when present.
    pub fn toggle(&mut self, item: FoodOption) {
        match self.selected.iter().position(|existing| *existing == item) {
            Some(index) => {
                self.selected.remove(index);
            }
            None => self.selected.push(item),
        }
    }

    pub fn contains(&self, item: FoodOption) -> bool {
        self.selected.contains(&item)
    }

    pub fn as_list(&self) -> &[FoodOption] {
        &self.selected
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}

impl FromIterator<FoodOption> for FoodSelectionSet {
    fn from_iter<I: IntoIterator<Item = FoodOption>>(iter: I) -> Self {
        let mut set = Self::new();
        for item in iter {
            if !set.contains(item) {
                set.selected.push(item);
            }
        }
        set
    }
}
