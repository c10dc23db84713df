mod api_facilities_router;
mod unit_sqlite_database;
