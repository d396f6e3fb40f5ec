//! Field validation for device records and node names.

use sitetree::Device;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name must not be blank")]
    BlankName,
    #[error("'{0}' is not a valid IPv4 address")]
    InvalidIp(String),
    #[error("'{0}' is not a valid port (expected 1-65535)")]
    InvalidPort(String),
}

/// Raw dialog input for a device, prior to validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceFields {
    pub name: String,
    pub ip: String,
    pub port: String,
    pub password: String,
}

impl DeviceFields {
    pub fn from_device(device: &Device) -> Self {
        Self {
            name: device.name.clone(),
            ip: device.ip.clone(),
            port: device.port.to_string(),
            password: device.password.clone().unwrap_or_default(),
        }
    }
}

/// Rejects blank (all-whitespace) names; returns the trimmed name.
pub fn validate_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::BlankName);
    }
    Ok(trimmed.to_string())
}

/// Strict dotted-quad check: exactly four all-digit groups, each 0-255.
pub fn validate_ipv4(ip: &str) -> Result<String, ValidationError> {
    let trimmed = ip.trim();
    let invalid = || ValidationError::InvalidIp(trimmed.to_string());
    let groups: Vec<&str> = trimmed.split('.').collect();
    if groups.len() != 4 {
        return Err(invalid());
    }
    for group in groups {
        if group.is_empty() || group.len() > 3 || !group.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let value: u16 = group.parse().map_err(|_| invalid())?;
        if value > 255 {
            return Err(invalid());
        }
    }
    Ok(trimmed.to_string())
}

pub fn validate_port(port: &str) -> Result<u16, ValidationError> {
    let trimmed = port.trim();
    match trimmed.parse::<u32>() {
        Ok(value) if (1..=65_535).contains(&value) => Ok(value as u16),
        _ => Err(ValidationError::InvalidPort(trimmed.to_string())),
    }
}

/// Validates all fields at once; nothing is applied on failure. An empty
/// password becomes `None` so it stays out of the persisted JSON.
pub fn validate_device_fields(fields: &DeviceFields) -> Result<Device, ValidationError> {
    let name = validate_name(&fields.name)?;
    let ip = validate_ipv4(&fields.ip)?;
    let port = validate_port(&fields.port)?;
    let password = if fields.password.is_empty() {
        None
    } else {
        Some(fields.password.clone())
    };
    Ok(Device {
        name,
        ip,
        port,
        password,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_octet_rejected() {
        assert_eq!(
            validate_ipv4("999.1.1.1"),
            Err(ValidationError::InvalidIp("999.1.1.1".to_string()))
        );
    }

    #[test]
    fn trailing_garbage_rejected() {
        assert!(validate_ipv4("10.0.0.5x").is_err());
        assert!(validate_ipv4("10.0.0.5.6").is_err());
        assert!(validate_ipv4("10.0.0").is_err());
    }

    #[test]
    fn port_bounds() {
        assert!(validate_port("0").is_err());
        assert!(validate_port("70000").is_err());
        assert!(validate_port("x").is_err());
        assert_eq!(validate_port("5900"), Ok(5900));
        assert_eq!(validate_port("65535"), Ok(65535));
    }
}
