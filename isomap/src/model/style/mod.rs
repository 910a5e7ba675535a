mod feature_style;

pub use feature_style::FeatureStyle;
