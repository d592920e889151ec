/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Macro used for implementing geometry macros. Used for extracting macro repetition count for
/// reserving capacity up front.
#[doc(hidden)]
#[macro_export]
macro_rules! replace_expr {
    ($_t:tt $sub:expr) => {
        $sub
    };
}

/// Construct a [LineString](crate::geometry::LineString) from a list of `(x, y)` tuples.
///
/// # Examples
///
/// ```
/// # use buffer2d::line_string;
/// # use buffer2d::core::math::Vector2;
/// let ls = line_string![(0.0, 1.0), (2.0, 0.0)];
/// assert_eq!(ls.points.len(), 2);
/// assert_eq!(ls.points[0], Vector2::new(0.0, 1.0));
/// ```
#[macro_export]
macro_rules! line_string {
    ($( $x:expr ),* $(,)?) => {
        {
            use $crate::geometry::LineString;
            let size = <[()]>::len(&[$($crate::replace_expr!(($x) ())),*]);
            let mut ls = LineString::with_capacity(size);
            $(
                ls.add($x.0, $x.1);
            )*
            ls
        }
    };
}

/// Construct a [Ring](crate::geometry::Ring) from a list of `(x, y)` tuples.
///
/// The closing (duplicated) vertex must be supplied explicitly, matching the ring data model.
///
/// # Examples
///
/// ```
/// # use buffer2d::ring;
/// let r = ring![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)];
/// assert_eq!(r.points.len(), 5);
/// assert!(r.is_closed());
/// ```
#[macro_export]
macro_rules! ring {
    ($( $x:expr ),* $(,)?) => {
        {
            use $crate::geometry::Ring;
            let size = <[()]>::len(&[$($crate::replace_expr!(($x) ())),*]);
            let mut r = Ring::with_capacity(size);
            $(
                r.add($x.0, $x.1);
            )*
            r
        }
    };
}
