mod announcement;
mod application;
mod discussion;
mod favorite;
mod message;
mod rating;
mod user;
