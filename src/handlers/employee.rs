use actix_web::{web, HttpRequest, HttpResponse};
use url::form_urlencoded;
use validator::Validate;
use crate::db::EmployeeStore;
use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeeFilter, EmployeePage, EmployeeType, PublicEmployee};
use crate::utils::pagination::{window_and_page, TagOrder, DEFAULT_PAGE_SIZE};
use crate::utils::validation::validate_payload;

/// Decoded `GET /v1/employees` query. `types` may repeat.
#[derive(Debug, PartialEq, Validate)]
pub struct ListEmployeesParams {
    pub types: Vec<EmployeeType>,
    #[validate(range(min = 1))]
    pub limit: i64,
    pub after_id: Option<String>,
    pub before_id: Option<String>,
}

impl Default for ListEmployeesParams {
    fn default() -> Self {
        ListEmployeesParams {
            types: Vec::new(),
            limit: DEFAULT_PAGE_SIZE as i64,
            after_id: None,
            before_id: None,
        }
    }
}

impl ListEmployeesParams {
    // serde_urlencoded drops repeated keys, so the pairs are walked by hand.
    pub fn from_query_str(query: &str) -> Result<Self, AppError> {
        let mut params = ListEmployeesParams::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "types" => {
                    let employee_type = value.parse::<EmployeeType>().map_err(AppError::BadRequest)?;
                    if !params.types.contains(&employee_type) {
                        params.types.push(employee_type);
                    }
                }
                "limit" => {
                    params.limit = value
                        .trim()
                        .parse::<i64>()
                        .map_err(|_| AppError::BadRequest(format!("Invalid limit: {}", value)))?;
                }
                "afterId" => params.after_id = Some(value.into_owned()).filter(|v| !v.is_empty()),
                "beforeId" => params.before_id = Some(value.into_owned()).filter(|v| !v.is_empty()),
                _ => {}
            }
        }

        validate_payload(&params)?;
        Ok(params)
    }
}

pub async fn list_employees(
    req: HttpRequest,
    store: web::Data<dyn EmployeeStore>,
) -> Result<HttpResponse, AppError> {
    let params = ListEmployeesParams::from_query_str(req.query_string())?;
    let page = fetch_page(store.get_ref(), &params).await?;

    Ok(HttpResponse::Ok().json(page))
}

pub async fn get_employee(
    store: web::Data<dyn EmployeeStore>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let employee = fetch_employee(store.get_ref(), &id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(employee))
}

pub async fn fetch_page(
    store: &dyn EmployeeStore,
    params: &ListEmployeesParams,
) -> Result<EmployeePage, AppError> {
    let filter = EmployeeFilter::by_types(params.types.clone());

    let mut employees = store.list(&filter).await.map_err(|e| {
        log::error!("Failed to list employees (filter: {:?}): {:?}", filter, e);
        AppError::InternalServerError("Database error".to_string())
    })?;

    let order = TagOrder::new().map_err(|e| {
        log::error!("{}", e);
        AppError::InternalServerError("Collation error".to_string())
    })?;
    order.sort(&mut employees, |employee: &Employee| employee.tag.as_str());

    let page = window_and_page(
        employees,
        |employee: &Employee| employee.tag.as_str(),
        params.after_id.as_deref(),
        params.before_id.as_deref(),
        params.limit as usize,
    );

    Ok(EmployeePage {
        has_more: page.has_more,
        data: page.data.into_iter().map(PublicEmployee::from).collect(),
    })
}

pub async fn fetch_employee(store: &dyn EmployeeStore, id: &str) -> Result<PublicEmployee, AppError> {
    let employee = store.find_by_tag(id).await.map_err(|e| {
        log::error!("Failed to get employee {}: {:?}", id, e);
        AppError::InternalServerError("Database error".to_string())
    })?;

    match employee {
        Some(employee) => Ok(PublicEmployee::from(employee)),
        None => {
            log::debug!("Employee {} not found", id);
            Err(AppError::employee_not_found(id))
        }
    }
}
