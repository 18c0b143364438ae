/// Formats a secret as `...` so it never reaches logs.
pub fn mask_fmt<T: ?Sized>(_: &T, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    f.write_str("...")
}
