use serde::Deserialize;
use validator::Validate;

use crate::domain::auth::{Credentials, Registration};
use crate::domain::types::{Email, Gender, NonEmptyString, PhoneNumber, UserRole};
use crate::forms::FormError;

#[derive(Clone, Debug, Default, Deserialize, Validate)]
/// Login form submitted from `/login`.
pub struct LoginForm {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub email: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub password: String,
}

impl TryFrom<LoginForm> for Credentials {
    type Error = FormError;

    fn try_from(form: LoginForm) -> Result<Self, Self::Error> {
        let form = LoginForm {
            email: form.email.trim().to_string(),
            ..form
        };
        form.validate().map_err(|_| FormError::MissingCredentials)?;

        let email = Email::new(form.email).map_err(|_| FormError::InvalidEmail)?;

        Ok(Credentials {
            email,
            password: form.password,
        })
    }
}

#[derive(Clone, Debug, Default, Deserialize, Validate)]
/// Registration form submitted from `/register`.
pub struct RegisterForm {
    #[validate(length(max = 64, message = "Username is too long"))]
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub gender: String,
    #[validate(length(max = 256, message = "Address is too long"))]
    #[serde(default)]
    pub address: String,
    /// Role tag; empty means patient.
    #[serde(default)]
    pub role: String,
}

impl TryFrom<RegisterForm> for Registration {
    type Error = FormError;

    fn try_from(form: RegisterForm) -> Result<Self, Self::Error> {
        if form.password != form.confirm_password {
            return Err(FormError::PasswordMismatch);
        }

        form.validate()?;

        let username = NonEmptyString::new(&form.username)
            .map_err(|_| FormError::MissingField("username"))?;
        let email = Email::new(form.email).map_err(|_| FormError::InvalidEmail)?;
        let phone = PhoneNumber::new(&form.phone).map_err(|_| FormError::InvalidPhoneNumber)?;
        let gender = form
            .gender
            .parse::<Gender>()
            .map_err(|_| FormError::InvalidGender)?;
        let role = match UserRole::from(form.role.as_str()) {
            UserRole::Admin => return Err(FormError::InvalidRole),
            role => role,
        };

        Ok(Registration {
            username,
            email,
            password: form.password,
            phone,
            gender,
            address: form.address.trim().to_string(),
            role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_form() -> RegisterForm {
        RegisterForm {
            username: "jdoe".to_string(),
            email: "JDoe@Example.com".to_string(),
            password: "s3cret".to_string(),
            confirm_password: "s3cret".to_string(),
            phone: "+1 650-253-0000".to_string(),
            gender: "female".to_string(),
            address: " 1 Main St ".to_string(),
            role: String::new(),
        }
    }

    #[test]
    fn login_requires_both_fields() {
        let form = LoginForm {
            email: "user@example.com".to_string(),
            password: String::new(),
        };
        assert!(matches!(
            Credentials::try_from(form),
            Err(FormError::MissingCredentials)
        ));

        let form = LoginForm {
            email: "   ".to_string(),
            password: "secret".to_string(),
        };
        assert!(matches!(
            Credentials::try_from(form),
            Err(FormError::MissingCredentials)
        ));
    }

    #[test]
    fn login_normalizes_email() {
        let credentials = Credentials::try_from(LoginForm {
            email: " User@Example.com ".to_string(),
            password: "secret".to_string(),
        })
        .unwrap();
        assert_eq!(credentials.email.as_str(), "user@example.com");
        assert_eq!(credentials.password, "secret");
    }

    #[test]
    fn login_rejects_malformed_email() {
        let result = Credentials::try_from(LoginForm {
            email: "user".to_string(),
            password: "secret".to_string(),
        });
        assert!(matches!(result, Err(FormError::InvalidEmail)));
    }

    #[test]
    fn registration_rejects_mismatched_passwords() {
        let form = RegisterForm {
            password: "a".to_string(),
            confirm_password: "b".to_string(),
            ..register_form()
        };
        assert!(matches!(
            Registration::try_from(form),
            Err(FormError::PasswordMismatch)
        ));
    }

    #[test]
    fn registration_builds_domain_record() {
        let registration = Registration::try_from(register_form()).unwrap();
        assert_eq!(registration.username.as_str(), "jdoe");
        assert_eq!(registration.email.as_str(), "jdoe@example.com");
        assert_eq!(registration.phone.as_str(), "+16502530000");
        assert_eq!(registration.gender, Gender::Female);
        assert_eq!(registration.address, "1 Main St");
        assert_eq!(registration.role, UserRole::Patient);
    }

    #[test]
    fn registration_accepts_doctor_but_not_admin() {
        let doctor = RegisterForm {
            role: "doctor".to_string(),
            ..register_form()
        };
        assert_eq!(Registration::try_from(doctor).unwrap().role, UserRole::Doctor);

        let admin = RegisterForm {
            role: "admin".to_string(),
            ..register_form()
        };
        assert!(matches!(
            Registration::try_from(admin),
            Err(FormError::InvalidRole)
        ));
    }

    #[test]
    fn registration_requires_password_and_username() {
        let form = RegisterForm {
            password: String::new(),
            confirm_password: String::new(),
            ..register_form()
        };
        assert!(matches!(
            Registration::try_from(form),
            Err(FormError::Validation(_))
        ));

        let form = RegisterForm {
            username: "   ".to_string(),
            ..register_form()
        };
        assert!(matches!(
            Registration::try_from(form),
            Err(FormError::MissingField("username"))
        ));
    }

    #[test]
    fn registration_rejects_bad_phone_and_gender() {
        let form = RegisterForm {
            phone: "call me".to_string(),
            ..register_form()
        };
        assert!(matches!(
            Registration::try_from(form),
            Err(FormError::InvalidPhoneNumber)
        ));

        let form = RegisterForm {
            gender: "robot".to_string(),
            ..register_form()
        };
        assert!(matches!(
            Registration::try_from(form),
            Err(FormError::InvalidGender)
        ));
    }
}
