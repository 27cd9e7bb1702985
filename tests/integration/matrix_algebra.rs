use proptest::array::{uniform3, uniform4};
use proptest::prelude::*;
use tessera::{Matrix, Matrix2x2, Matrix3x3, Matrix4x4};

#[test]
fn test_identity_determinants() {
    println!("=== Identity Determinant Test ===");

    assert_eq!(Matrix2x2::<f64>::identity().determinant(), 1.0);
    assert_eq!(Matrix3x3::<f64>::identity().determinant(), 1.0);
    assert_eq!(Matrix4x4::<f64>::identity().determinant(), 1.0);
    assert_eq!(Matrix::<8, i32>::identity().determinant(), 1);

    println!("Identity determinants: OK");
}

#[test]
fn test_subtraction_differs_from_addition() {
    let a = Matrix2x2::<i32>::from_rows([[5, 7], [9, 11]]);
    let b = Matrix2x2::<i32>::from_rows([[1, 2], [3, 4]]);
    assert_eq!(a - b, Matrix::new([[4, 5], [6, 7]]));
    assert_eq!(a + b, Matrix::new([[6, 9], [12, 15]]));
}

proptest! {
    #[test]
    fn transpose_is_an_involution(rows in uniform4(uniform4(any::<i32>()))) {
        let m = Matrix4x4::<i32>::from_rows(rows);
        prop_assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn float_transpose_is_exact(rows in uniform3(uniform3(-1.0e6_f64..1.0e6))) {
        let m = Matrix3x3::<f64>::from_rows(rows);
        prop_assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn zero_row_gives_zero_determinant(rows in uniform4(uniform4(-50_i64..50)), zero in 0_usize..4) {
        let mut m = Matrix4x4::<i64>::from_rows(rows);
        m[zero] = [0; 4];
        prop_assert_eq!(m.determinant(), 0);
    }

    #[test]
    fn transpose_keeps_determinant(rows in uniform3(uniform3(-100_i64..100))) {
        let m = Matrix3x3::<i64>::from_rows(rows);
        prop_assert_eq!(m.transpose().determinant(), m.determinant());
    }

    #[test]
    fn determinant_is_multiplicative(a in uniform3(uniform3(-10_i64..10)), b in uniform3(uniform3(-10_i64..10))) {
        let a = Matrix3x3::<i64>::from_rows(a);
        let b = Matrix3x3::<i64>::from_rows(b);
        prop_assert_eq!((a * b).determinant(), a.determinant() * b.determinant());
    }

    #[test]
    fn row_swap_negates_determinant(rows in uniform4(uniform4(-20_i64..20)), r1 in 0_usize..4, r2 in 0_usize..4) {
        prop_assume!(r1 != r2);
        let m = Matrix4x4::<i64>::from_rows(rows);
        let mut swapped = m;
        swapped.swap_rows(r1, r2);
        prop_assert_eq!(swapped.determinant(), -m.determinant());
    }

    #[test]
    fn identity_is_neutral(rows in uniform3(uniform3(-1000_i32..1000))) {
        let m = Matrix3x3::<i32>::from_rows(rows);
        prop_assert_eq!(m * Matrix3x3::<i32>::identity(), m);
        prop_assert_eq!(Matrix3x3::<i32>::identity() * m, m);
    }
}
