/// The outbound side of the shortcut dispatcher: everything a recognized
/// key press may ask the hosting player to do.
///
/// Values arriving here are already normalized — volume is within
/// `[0, 1]` and seek targets within `[0, duration]`.
pub trait TransportControl {
    fn volume_changed(&mut self, value: f32);
    fn toggle_play(&mut self);
    fn toggle_full_screen(&mut self);
    fn toggle_page_full_screen(&mut self);
    fn seek(&mut self, time: f64);
}
