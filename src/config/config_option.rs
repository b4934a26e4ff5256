/// A configuration option, bundled with its name and the bounds of its value.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    /// Sets the value of the option, if the value is within the bounds of the option.
    ///
    /// Returns whether the value was set.
    pub fn set(&mut self, value: T) -> bool {
        match self.min <= value && value <= self.max {
            true => {
                self.value = value;
                true
            }
            false => false,
        }
    }
}
