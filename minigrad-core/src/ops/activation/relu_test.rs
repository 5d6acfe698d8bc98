#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::autograd::grad_check::{check_grad, GradCheckConfig, GradCheckError};
    use approx::assert_relative_eq;

    #[test]
    fn test_relu_forward() {
        assert_relative_eq!(relu_op(&Scalar::new(-2.0)).value(), 0.0);
        assert_relative_eq!(relu_op(&Scalar::new(0.0)).value(), 0.0);
        assert_relative_eq!(relu_op(&Scalar::new(3.5)).value(), 3.5);
    }

    #[test]
    fn test_relu_backward() -> Result<(), MinigradError> {
        let pos = Scalar::new(1.5);
        let neg = Scalar::new(-1.5);
        (&pos.relu() + &neg.relu()).backward()?;
        assert_eq!(pos.derivative(), Some(1.0));
        assert_eq!(neg.derivative(), Some(0.0));
        Ok(())
    }

    #[test]
    fn test_relu_grad_check_away_from_kink() -> Result<(), GradCheckError> {
        let config = GradCheckConfig::default();
        check_grad(|x| relu_op(&x[0]), &[0.7], &config)?;
        check_grad(|x| relu_op(&x[0]), &[-0.7], &config)
    }
}
