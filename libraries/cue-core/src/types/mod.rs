mod track;

pub use track::TrackDescriptor;
