//! Palindrome checks.

/// Checks whether `text` reads the same forwards and backwards.
///
/// Characters are compared exactly (case-sensitive) with one cursor from
/// each end moving inward. The empty string is a palindrome.
pub fn is_palindrome(text: &str) -> bool {
    let mut chars = text.chars();
    while let (Some(front), Some(back)) = (chars.next(), chars.next_back()) {
        if front != back {
            return false;
        }
    }
    true
}

/// Checks whether `items` reads the same forwards and backwards.
pub fn is_palindrome_slice<T: PartialEq>(items: &[T]) -> bool {
    let (mut front, mut back) = (0, items.len());
    while front + 1 < back {
        back -= 1;
        if items[front] != items[back] {
            return false;
        }
        front += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::{is_palindrome, is_palindrome_slice};

    #[test]
    fn test_palindromes() {
        assert!(is_palindrome("racecar"));
        assert!(is_palindrome("abba"));
        assert!(is_palindrome("x"));
        assert!(is_palindrome(""));
    }

    #[test]
    fn test_not_palindromes() {
        assert!(!is_palindrome("hello"));
        assert!(!is_palindrome("ab"));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!is_palindrome("Racecar"));
    }

    #[test]
    fn test_multibyte() {
        assert!(is_palindrome("été"));
        assert!(!is_palindrome("éta"));
    }

    #[test]
    fn test_slices() {
        assert!(is_palindrome_slice::<u8>(&[]));
        assert!(is_palindrome_slice(&[1, 2, 1]));
        assert!(is_palindrome_slice(&[1, 2, 2, 1]));
        assert!(!is_palindrome_slice(&[1, 2, 3]));
    }
}
