use crate::config::ParallaxConfig;

pub fn offset(scroll_y: f64, config: &ParallaxConfig) -> f64 {
    (scroll_y / config.divisor).min(config.max_offset)
}

pub fn transform(offset: f64) -> String {
    format!("translateY({}px)", offset)
}

pub trait ParallaxTarget {
    fn set_transform(&mut self, transform: &str);
}

pub struct Parallax<T> {
    target: T,
    config: ParallaxConfig,
}

impl<T: ParallaxTarget> Parallax<T> {
    pub fn new(target: T, config: ParallaxConfig) -> Self {
        Self { target, config }
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        let offset = offset(scroll_y, &self.config);
        self.target.set_transform(&transform(offset));
    }
}
