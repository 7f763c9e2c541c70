/// Splits a row-major flat index into `(row, col)`.
#[inline]
pub fn unflatten(idx: usize, width: usize) -> (usize, usize) {
    let col = idx % width;
    let row = (idx - col) / width;
    (row, col)
}

#[inline]
pub fn flatten(row: usize, col: usize, width: usize) -> usize {
    row * width + col
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unflatten(){
        assert_eq!(unflatten(0, 3), (0, 0));
        assert_eq!(unflatten(4, 3), (1, 1));
        assert_eq!(unflatten(8, 3), (2, 2));
    }

    #[test]
    fn test_flatten_inverts_unflatten(){
        let width = 7;
        for idx in 0..(width*5) {
            let (row, col) = unflatten(idx, width);
            assert_eq!(flatten(row, col, width), idx);
        }
    }
}
