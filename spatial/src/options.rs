/// The leaf capacity used unless configured otherwise.
pub const DEFAULT_BIN_SIZE: usize = 1024;

/// Tree configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// The number of items a leaf may hold before it is subdivided.
    bin_size: usize,
}

impl Config {
    pub fn bin_size(&self) -> usize {
        self.bin_size
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bin_size: DEFAULT_BIN_SIZE,
        }
    }
}

impl Config {
    pub fn set_option(&mut self, o: TreeOpt) {
        match o {
            TreeOpt::BinSize(v) => self.bin_size = v.max(1),
        }
    }
}

/// Options which can be set on a tree's configuration.
#[derive(Clone, Debug)]
pub enum TreeOpt {
    /// Leaf capacity. Dense clusters such as asteroid belts favour large bins, sparse and
    /// frequently moving objects favour small ones. Zero is treated as one.
    BinSize(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_bin_size() {
        let mut config = Config::default();
        assert_eq!(config.bin_size(), DEFAULT_BIN_SIZE);
        config.set_option(TreeOpt::BinSize(64));
        assert_eq!(config.bin_size(), 64);
        config.set_option(TreeOpt::BinSize(0));
        assert_eq!(config.bin_size(), 1);
    }
}
