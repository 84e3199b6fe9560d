use ratatui::layout::{Flex, Layout, Rect, Size};

/// Return a rectangle of the given size centered inside `area`.  If `area` is
/// too small in either dimension, the result is clipped to it.
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [inner] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [inner] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(inner);
    inner
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Rect::new(0, 0, 20, 20), Size::new(20, 20), Rect::new(0, 0, 20, 20))]
    #[case(Rect::new(0, 0, 80, 24), Size::new(20, 20), Rect::new(30, 2, 20, 20))]
    #[case(Rect::new(5, 7, 24, 22), Size::new(20, 20), Rect::new(7, 8, 20, 20))]
    fn test_center_rect(#[case] area: Rect, #[case] size: Size, #[case] centered: Rect) {
        assert_eq!(center_rect(area, size), centered);
    }
}
