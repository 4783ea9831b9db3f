mod channel;

pub use channel::ChannelChooser;
