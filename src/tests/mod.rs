mod properties;
mod stress;
