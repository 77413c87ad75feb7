use actix_web::web;

pub mod employee;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/v1/employees")
            .route(web::get().to(employee::list_employees)),
    )
    .service(
        web::resource("/v1/employees/{id}")
            .route(web::get().to(employee::get_employee)),
    );
}
