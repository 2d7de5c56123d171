use actix_web::{web, HttpResponse, Responder};
use common::model::registration::{Registration, RegistrationReceipt};
use log::info;
use uuid::Uuid;

/// HTTP handler wrapper that converts the internal result to an `HttpResponse`.
///
/// - On success: `201 Created` with the receipt as JSON.
/// - On failure: `400 Bad Request` with the error message.
pub async fn process(payload: web::Json<Registration>) -> impl Responder {
    match receive_registration(&payload) {
        Ok(receipt) => HttpResponse::Created().json(receipt),
        Err(e) => HttpResponse::BadRequest().body(format!("Error: {}", e)),
    }
}

/// Decodes the photo (if any) and issues a receipt for the registration.
pub fn receive_registration(registration: &Registration) -> Result<RegistrationReceipt, String> {
    let photo_bytes = match &registration.profile_picture {
        Some(photo) => photo
            .decode()
            .map(|p| p.size())
            .map_err(|e| format!("profile picture is not valid base64: {}", e))?,
        None => 0,
    };

    let receipt = RegistrationReceipt {
        receipt_id: Uuid::new_v4().to_string(),
    };

    info!(
        "registration {} received: student {} ({}), {} {} section {}, photo {} bytes",
        receipt.receipt_id,
        registration.student_id.trim(),
        [&registration.first_name, &registration.last_name]
            .iter()
            .map(|s| s.trim())
            .collect::<Vec<_>>()
            .join(" "),
        registration.course.trim(),
        registration.year,
        registration.section.trim(),
        photo_bytes
    );

    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::registrations::configure_routes;
    use actix_web::http::{header, StatusCode};
    use actix_web::test as actix_test;
    use actix_web::App;
    use common::model::photo::Photo;
    use common::model::registration::EncodedPhoto;
    use common::model::student::StudentForm;

    fn registration() -> Registration {
        let form = StudentForm {
            profile_picture: Some(Photo::new("me.png", "image/png", vec![0x89, 0x50, 0x4e, 0x47])),
            first_name: "Andres".into(),
            middle_name: String::new(),
            last_name: "Bonifacio".into(),
            student_id: "20231234".into(),
            course: "BSIT".into(),
            year: "2nd Year".into(),
            section: "A".into(),
            street: "1 Tondo St.".into(),
            city_municipality: "Mandaue City".into(),
            province: "Cebu".into(),
            postal_code: "6014".into(),
        };
        Registration::from(&form)
    }

    #[actix_web::test]
    async fn accepts_registration_with_receipt() {
        let app = actix_test::init_service(App::new().service(configure_routes())).await;
        let req = actix_test::TestRequest::post()
            .uri("/api/registrations")
            .set_json(registration())
            .to_request();

        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let receipt: RegistrationReceipt = actix_test::read_body_json(resp).await;
        assert!(Uuid::parse_str(&receipt.receipt_id).is_ok());
    }

    #[actix_web::test]
    async fn rejects_body_that_is_not_a_registration() {
        let app = actix_test::init_service(App::new().service(configure_routes())).await;
        let req = actix_test::TestRequest::post()
            .uri("/api/registrations")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload(r#"{"firstName": "Only"}"#)
            .to_request();

        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn rejects_photo_with_broken_base64() {
        let mut payload = registration();
        payload.profile_picture = Some(EncodedPhoto {
            file_name: "me.png".into(),
            media_type: "image/png".into(),
            base64: "%%%".into(),
        });
        let app = actix_test::init_service(App::new().service(configure_routes())).await;
        let req = actix_test::TestRequest::post()
            .uri("/api/registrations")
            .set_json(payload)
            .to_request();

        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn receipt_ids_are_unique() {
        let first = receive_registration(&registration()).unwrap();
        let second = receive_registration(&registration()).unwrap();
        assert_ne!(first.receipt_id, second.receipt_id);
    }
}
